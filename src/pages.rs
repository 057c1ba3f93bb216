//! Server-side rendering of the site's pages.
//!
//! Pages are plain semantic HTML assembled from the translation
//! dictionaries. All copy goes through `translations::lookup`; nothing in
//! here branches on the language. Navigation and the language switcher are
//! built through the localized path scheme in `routes`.

use crate::contact::{ContactForm, Field, SubmissionStatus, DEFAULT_SUBJECT, SUBJECTS};
use crate::i18n::{translations, Language};
use crate::routes::{build_localized_path, Page, ServiceCategory, ServiceKey};
use crate::seo::{escape_html, DocumentHead};

/// Everything a page render needs to know about the request.
pub struct PageContext<'a> {
    pub lang: Language,
    /// Logical path of the page being rendered (no language prefix)
    pub logical_path: String,
    /// Base origin for hreflang alternates
    pub base_url: &'a str,
}

impl PageContext<'_> {
    fn t<'k>(&self, key: &'k str) -> &'k str {
        translations::lookup(key, self.lang)
    }

    fn path(&self, logical: &str) -> String {
        build_localized_path(logical, self.lang)
    }
}

/// Render a full page document for a GET request.
pub fn render(page: Page, ctx: &PageContext<'_>) -> String {
    let body = match page {
        Page::Home => home_body(ctx),
        Page::Services => services_body(ctx),
        Page::ServiceDetail(key) => service_detail_body(ctx, key),
        Page::Portfolio => portfolio_body(ctx),
        Page::Blog => blog_body(ctx),
        Page::Contact => contact_body(ctx, &ContactForm::new()),
    };
    layout(ctx, head_for(page, ctx), body)
}

/// Re-render the contact page around a form that has been through a submit
/// attempt (validation errors, or the success view).
pub fn render_contact_result(ctx: &PageContext<'_>, form: &ContactForm) -> String {
    let body = contact_body(ctx, form);
    layout(ctx, head_for(Page::Contact, ctx), body)
}

/// Render the not-found view. No hreflang alternates are advertised for a
/// miss; the head only carries a title.
pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let mut head = DocumentHead::new();
    head.sync(
        ctx.lang,
        &ctx.logical_path,
        Some(&format!("{} - WebBuilder", ctx.t("notFound.title"))),
        None,
        ctx.base_url,
    );
    head.teardown();

    let body = format!(
        "<section class=\"not-found\">\n\
         <h1>{title}</h1>\n\
         <p>{message}</p>\n\
         <a href=\"{home}\">{back}</a>\n\
         </section>",
        title = escape_html(ctx.t("notFound.title")),
        message = escape_html(ctx.t("notFound.message")),
        home = ctx.path(""),
        back = escape_html(ctx.t("notFound.home")),
    );
    layout(ctx, head, body)
}

/// The synchronized head for a page: document language, title, description,
/// and the full alternate-link set for the page's logical path.
fn head_for(page: Page, ctx: &PageContext<'_>) -> DocumentHead {
    let (title, description) = match page {
        Page::Home => (
            ctx.t("meta.home.title").to_string(),
            ctx.t("meta.home.description").to_string(),
        ),
        Page::Services => (
            ctx.t("meta.services.title").to_string(),
            ctx.t("meta.services.description").to_string(),
        ),
        Page::ServiceDetail(key) => {
            let item = key.translation_key();
            (
                format!(
                    "{} - WebBuilder",
                    ctx.t(&format!("services.items.{item}.title"))
                ),
                ctx.t(&format!("services.items.{item}.description")).to_string(),
            )
        }
        Page::Portfolio => (
            ctx.t("meta.portfolio.title").to_string(),
            ctx.t("meta.portfolio.description").to_string(),
        ),
        Page::Blog => (
            ctx.t("meta.blog.title").to_string(),
            ctx.t("meta.blog.description").to_string(),
        ),
        Page::Contact => (
            format!("{} - WebBuilder", ctx.t("nav.contact")),
            ctx.t("contact.subtitle").to_string(),
        ),
    };

    let mut head = DocumentHead::new();
    head.sync(
        ctx.lang,
        &page.logical_path(),
        Some(&title),
        Some(&description),
        ctx.base_url,
    );
    head
}

/// The synchronized head owns the document language attribute; the context
/// language only covers a head that was never synced.
fn layout(ctx: &PageContext<'_>, head: DocumentHead, body: String) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n{head}</head>\n\
         <body>\n\
         <header>\n{nav}{switcher}</header>\n\
         <main>\n{body}\n</main>\n\
         <footer>\n\
         <p>{tagline}</p>\n\
         <p>&copy; WebBuilder. {rights}</p>\n\
         </footer>\n\
         </body>\n\
         </html>\n",
        lang = head.lang().unwrap_or(ctx.lang.code()),
        head = head.render(),
        nav = nav(ctx),
        switcher = language_switcher(ctx),
        body = body,
        tagline = escape_html(ctx.t("footer.tagline")),
        rights = escape_html(ctx.t("footer.rights")),
    )
}

/// Navigation items: translation key and logical path.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("nav.home", ""),
    ("nav.services", "services"),
    ("nav.portfolio", "portfolio"),
    ("nav.blog", "blog"),
    ("nav.contact", "contact"),
];

fn nav(ctx: &PageContext<'_>) -> String {
    let mut out = String::from("<nav>\n");
    for (key, logical) in NAV_ITEMS {
        let href = ctx.path(logical);
        let current = if is_active(ctx, logical) {
            " aria-current=\"page\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<a href=\"{href}\"{current}>{label}</a>\n",
            label = escape_html(ctx.t(key)),
        ));
    }
    out.push_str("</nav>\n");
    out
}

/// Home is active only on an exact match; other items match by prefix so a
/// service detail page keeps "Services" highlighted.
fn is_active(ctx: &PageContext<'_>, logical: &str) -> bool {
    if logical.is_empty() {
        ctx.logical_path == "/"
    } else {
        ctx.logical_path.starts_with(&format!("/{logical}"))
    }
}

/// The language switcher re-targets the current logical path in each
/// language, so switching never loses the page.
fn language_switcher(ctx: &PageContext<'_>) -> String {
    let mut out = String::from("<nav class=\"languages\">\n");
    for lang in Language::all() {
        let href = build_localized_path(&ctx.logical_path, lang);
        let current = if lang == ctx.lang {
            " aria-current=\"true\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<a href=\"{href}\" hreflang=\"{code}\"{current}>{name}</a>\n",
            code = lang.code(),
            name = escape_html(lang.native_name()),
        ));
    }
    out.push_str("</nav>\n");
    out
}

// ==================== Page Bodies ====================

fn home_body(ctx: &PageContext<'_>) -> String {
    format!(
        "<section class=\"hero\">\n\
         <h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         <a class=\"cta\" href=\"{contact}\">{cta}</a>\n\
         </section>\n{services}",
        title = escape_html(ctx.t("hero.title")),
        subtitle = escape_html(ctx.t("hero.subtitle")),
        contact = ctx.path("contact"),
        cta = escape_html(ctx.t("hero.cta")),
        services = services_grid(ctx),
    )
}

fn services_body(ctx: &PageContext<'_>) -> String {
    format!(
        "<section>\n<h1>{title}</h1>\n<p>{subtitle}</p>\n</section>\n{grid}",
        title = escape_html(ctx.t("services.title")),
        subtitle = escape_html(ctx.t("services.subtitle")),
        grid = services_grid(ctx),
    )
}

fn services_grid(ctx: &PageContext<'_>) -> String {
    let mut out = String::new();
    for category in ServiceCategory::ALL {
        let group = category.key();
        out.push_str(&format!(
            "<section class=\"category\">\n<h2>{title}</h2>\n<p>{description}</p>\n<ul>\n",
            title = escape_html(ctx.t(&format!("services.categories.{group}.title"))),
            description =
                escape_html(ctx.t(&format!("services.categories.{group}.description"))),
        ));
        for service in category.services() {
            let item = service.translation_key();
            out.push_str(&format!(
                "<li><a href=\"{href}\"><h3>{title}</h3><p>{description}</p></a></li>\n",
                href = ctx.path(&format!("services/{}", service.slug())),
                title = escape_html(ctx.t(&format!("services.items.{item}.title"))),
                description =
                    escape_html(ctx.t(&format!("services.items.{item}.description"))),
            ));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out
}

fn service_detail_body(ctx: &PageContext<'_>, key: ServiceKey) -> String {
    let item = key.translation_key();
    let mut out = format!(
        "<a href=\"{back_href}\">&larr; {back}</a>\n\
         <section>\n<h1>{title}</h1>\n<p>{description}</p>\n</section>\n",
        back_href = ctx.path("services"),
        back = escape_html(ctx.t("serviceDetail.back")),
        title = escape_html(ctx.t(&format!("services.items.{item}.title"))),
        description = escape_html(ctx.t(&format!("services.items.{item}.description"))),
    );

    // Optional per-service feature list; probe until the dictionary misses
    let mut features = Vec::new();
    for i in 0..6 {
        let feature_key = format!("serviceDetail.{item}.features.{i}");
        match translations::try_lookup(&feature_key, ctx.lang) {
            Some(value) => features.push(value),
            None => break,
        }
    }
    if !features.is_empty() {
        out.push_str(&format!(
            "<section class=\"features\">\n<h2>{}</h2>\n<ul>\n",
            escape_html(ctx.t("serviceDetail.featuresTitle"))
        ));
        for feature in features {
            out.push_str(&format!("<li>{}</li>\n", escape_html(feature)));
        }
        out.push_str("</ul>\n</section>\n");
    }

    out.push_str(&format!(
        "<a class=\"cta\" href=\"{href}\">{cta}</a>\n",
        href = ctx.path("contact"),
        cta = escape_html(ctx.t("serviceDetail.cta")),
    ));
    out
}

fn portfolio_body(ctx: &PageContext<'_>) -> String {
    format!(
        "<section>\n<h1>{title}</h1>\n<p>{subtitle}</p>\n</section>",
        title = escape_html(ctx.t("portfolio.title")),
        subtitle = escape_html(ctx.t("portfolio.subtitle")),
    )
}

fn blog_body(ctx: &PageContext<'_>) -> String {
    format!(
        "<section>\n<h1>{title}</h1>\n<p>{subtitle}</p>\n<p>{coming_soon}</p>\n</section>",
        title = escape_html(ctx.t("blog.title")),
        subtitle = escape_html(ctx.t("blog.subtitle")),
        coming_soon = escape_html(ctx.t("blog.comingSoon")),
    )
}

fn contact_body(ctx: &PageContext<'_>, form: &ContactForm) -> String {
    let intro = format!(
        "<section>\n<h1>{title}</h1>\n<p>{subtitle}</p>\n</section>\n",
        title = escape_html(ctx.t("contact.title")),
        subtitle = escape_html(ctx.t("contact.subtitle")),
    );

    if form.status() == SubmissionStatus::Success {
        return format!(
            "{intro}<section class=\"success\">\n\
             <h3>{success}</h3>\n\
             <a href=\"{href}\">{send_another}</a>\n\
             </section>\n{info}",
            success = escape_html(ctx.t("contact.success")),
            href = ctx.path("contact"),
            send_another = escape_html(ctx.t("contact.sendAnother")),
            info = contact_info(ctx),
        );
    }

    format!("{intro}{form}{info}", form = contact_form(ctx, form), info = contact_info(ctx))
}

fn contact_form(ctx: &PageContext<'_>, form: &ContactForm) -> String {
    let fields = form.fields();
    let mut out = format!(
        "<form method=\"post\" action=\"{action}\">\n",
        action = ctx.path("contact")
    );

    out.push_str(&text_input(
        ctx,
        "name",
        "contact.form.name",
        &fields.name,
        100,
        form.errors().get(Field::Name),
    ));
    out.push_str(&text_input(
        ctx,
        "phone",
        "contact.form.phone",
        &fields.phone,
        20,
        form.errors().get(Field::Phone),
    ));
    out.push_str(&text_input(
        ctx,
        "email",
        "contact.form.email",
        &fields.email,
        255,
        form.errors().get(Field::Email),
    ));

    // Subject: enumerated at the control, never validated
    out.push_str(&format!(
        "<label for=\"subject\">{}</label>\n<select id=\"subject\" name=\"subject\">\n",
        escape_html(ctx.t("contact.form.subject"))
    ));
    for subject in SUBJECTS {
        let selected = if fields.subject == subject || (fields.subject.is_empty() && subject == DEFAULT_SUBJECT) {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "<option value=\"{subject}\"{selected}>{label}</option>\n",
            label = escape_html(ctx.t(&format!("contact.form.subjects.{subject}"))),
        ));
    }
    out.push_str("</select>\n");

    out.push_str(&format!(
        "<label for=\"message\">{label}</label>\n\
         <textarea id=\"message\" name=\"message\" rows=\"6\" maxlength=\"1000\">{value}</textarea>\n",
        label = escape_html(ctx.t("contact.form.message")),
        value = escape_html(&fields.message),
    ));
    if let Some(error_key) = form.errors().get(Field::Message) {
        out.push_str(&error_line(ctx, error_key));
    }

    out.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>\n",
        escape_html(ctx.t("contact.form.submit"))
    ));
    out
}

fn text_input(
    ctx: &PageContext<'_>,
    name: &str,
    label_key: &str,
    value: &str,
    max_length: usize,
    error_key: Option<&str>,
) -> String {
    let mut out = format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\" maxlength=\"{max_length}\">\n",
        label = escape_html(ctx.t(label_key)),
        value = escape_html(value),
    );
    if let Some(error_key) = error_key {
        out.push_str(&error_line(ctx, error_key));
    }
    out
}

fn error_line(ctx: &PageContext<'_>, error_key: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape_html(ctx.t(error_key)))
}

fn contact_info(ctx: &PageContext<'_>) -> String {
    format!(
        "<aside class=\"contact-info\">\n\
         <p><span>{address_label}</span> Sofia, Bulgaria</p>\n\
         <p><span>{phone_label}</span> <a href=\"tel:+359888123456\">+359 888 123 456</a></p>\n\
         <p><span>Email</span> <a href=\"mailto:hello@webbuilder.bg\">hello@webbuilder.bg</a></p>\n\
         <p><span>{hours_label}</span> 9:00 - 18:00</p>\n\
         </aside>\n",
        address_label = escape_html(ctx.t("contact.info.address")),
        phone_label = escape_html(ctx.t("contact.info.phone")),
        hours_label = escape_html(ctx.t("contact.info.hours")),
    )
}
