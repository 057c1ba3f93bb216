//! Translation dictionaries and dotted-key lookup.
//!
//! All site copy lives here as data, keyed by dotted paths such as
//! `nav.home` or `contact.validation.emailInvalid`. Rendering code never
//! branches on the current language; it goes through [`lookup`].
//!
//! Lookup falls back along the chain: requested language → English → the
//! key itself. Returning the key for a miss lets callers probe for optional
//! entries (e.g., per-service feature lists) the same way the dictionaries
//! are probed by the templates.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Look up a translated string.
///
/// Falls back to English when the key is missing in `lang`, and to the key
/// itself when it is missing everywhere.
pub fn lookup<'a>(key: &'a str, lang: Language) -> &'a str {
    match try_lookup(key, lang) {
        Some(value) => value,
        None => {
            tracing::debug!(key, lang = lang.code(), "missing translation key");
            // The caller gets the key back so a miss is visible, never a blank
            key
        }
    }
}

/// Look up a translated string, reporting a miss as `None`.
///
/// Used to probe optional entries such as `serviceDetail.{key}.features.{i}`.
/// English is still consulted as a fallback; `None` means the key exists in
/// no dictionary.
pub fn try_lookup(key: &str, lang: Language) -> Option<&'static str> {
    if let Some(value) = table(lang).get(key) {
        return Some(value);
    }
    if lang != Language::ENGLISH {
        if let Some(value) = table(Language::ENGLISH).get(key) {
            return Some(value);
        }
    }
    None
}

fn table(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    static EN_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static BG_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static RU_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    match lang.code() {
        "bg" => BG_TABLE.get_or_init(|| BG.iter().copied().collect()),
        "ru" => RU_TABLE.get_or_init(|| RU.iter().copied().collect()),
        _ => EN_TABLE.get_or_init(|| EN.iter().copied().collect()),
    }
}

// ==================== English (canonical) ====================

static EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.services", "Services"),
    ("nav.portfolio", "Portfolio"),
    ("nav.blog", "Blog"),
    ("nav.contact", "Contact"),
    ("hero.title", "We build websites that grow your business"),
    (
        "hero.subtitle",
        "Design, development and digital marketing for ambitious companies",
    ),
    ("hero.cta", "Get a free quote"),
    ("meta.home.title", "WebBuilder - Web Design & Digital Marketing"),
    (
        "meta.home.description",
        "Professional web design, development and digital marketing agency in Sofia, Bulgaria.",
    ),
    ("meta.services.title", "Services - WebBuilder"),
    (
        "meta.services.description",
        "Web design, online stores, mobile apps, SEO and digital marketing services.",
    ),
    ("meta.portfolio.title", "Portfolio - WebBuilder"),
    (
        "meta.portfolio.description",
        "Selected projects we have designed, built and promoted.",
    ),
    ("meta.blog.title", "Blog - WebBuilder"),
    (
        "meta.blog.description",
        "News and practical advice on web design, SEO and online marketing.",
    ),
    ("services.title", "Our Services"),
    ("services.subtitle", "Everything your business needs to succeed online"),
    ("services.categories.presence.title", "Online Presence"),
    (
        "services.categories.presence.description",
        "Websites, stores and apps built for results",
    ),
    ("services.categories.seo.title", "Search & Ads"),
    (
        "services.categories.seo.description",
        "Be found by the customers who are already looking for you",
    ),
    ("services.categories.marketing.title", "Marketing & Reputation"),
    (
        "services.categories.marketing.description",
        "Grow your audience and keep it loyal",
    ),
    ("services.items.webDesign.title", "Web Design"),
    (
        "services.items.webDesign.description",
        "Modern, fast and mobile-friendly websites",
    ),
    ("services.items.ecommerce.title", "Online Stores"),
    (
        "services.items.ecommerce.description",
        "Complete e-commerce solutions that sell",
    ),
    ("services.items.mobileApps.title", "Mobile Apps"),
    (
        "services.items.mobileApps.description",
        "Native and cross-platform apps for iOS and Android",
    ),
    ("services.items.googleAds.title", "Google Ads"),
    (
        "services.items.googleAds.description",
        "Campaigns that turn clicks into customers",
    ),
    ("services.items.seoOptimization.title", "SEO Optimization"),
    (
        "services.items.seoOptimization.description",
        "Sustainable top positions in search results",
    ),
    ("services.items.googleMyBusiness.title", "Google My Business"),
    (
        "services.items.googleMyBusiness.description",
        "Stand out on the map where local customers search",
    ),
    ("services.items.socialNetworks.title", "Social Networks"),
    (
        "services.items.socialNetworks.description",
        "Content and management for your social profiles",
    ),
    ("services.items.onlineReputation.title", "Online Reputation"),
    (
        "services.items.onlineReputation.description",
        "Reviews and trust management for your brand",
    ),
    ("services.items.emailMarketing.title", "Email Marketing"),
    (
        "services.items.emailMarketing.description",
        "Campaigns and automations that bring customers back",
    ),
    ("serviceDetail.back", "All services"),
    ("serviceDetail.featuresTitle", "What's included"),
    ("serviceDetail.cta", "Request this service"),
    (
        "serviceDetail.webDesign.features.0",
        "Custom design tailored to your brand",
    ),
    (
        "serviceDetail.webDesign.features.1",
        "Responsive layout for every screen",
    ),
    ("serviceDetail.webDesign.features.2", "Fast loading and clean code"),
    (
        "serviceDetail.ecommerce.features.0",
        "Product catalog and inventory management",
    ),
    ("serviceDetail.ecommerce.features.1", "Secure online payments"),
    (
        "serviceDetail.ecommerce.features.2",
        "Delivery and invoicing integrations",
    ),
    (
        "serviceDetail.seoOptimization.features.0",
        "Technical audit and on-page optimization",
    ),
    (
        "serviceDetail.seoOptimization.features.1",
        "Keyword research and content plan",
    ),
    ("serviceDetail.seoOptimization.features.2", "Monthly ranking reports"),
    ("portfolio.title", "Our Work"),
    ("portfolio.subtitle", "A selection of projects we are proud of"),
    ("blog.title", "Blog"),
    ("blog.subtitle", "News and advice from our team"),
    // Not yet translated; bg/ru fall back to this entry
    ("blog.comingSoon", "New articles are coming soon. Stay tuned!"),
    ("contact.title", "Let's talk about your project"),
    (
        "contact.subtitle",
        "Tell us about your idea and we will get back to you within one business day.",
    ),
    ("contact.success", "Thank you! Your message has been sent."),
    ("contact.sendAnother", "Send another message"),
    ("contact.form.name", "Name"),
    ("contact.form.phone", "Phone"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Subject"),
    ("contact.form.message", "Message"),
    ("contact.form.submit", "Send message"),
    ("contact.form.subjects.webDesign", "Web Design"),
    ("contact.form.subjects.development", "Development"),
    ("contact.form.subjects.seo", "SEO"),
    ("contact.form.subjects.marketing", "Marketing"),
    ("contact.form.subjects.other", "Other"),
    ("contact.validation.nameRequired", "Please enter your name"),
    ("contact.validation.emailInvalid", "Please enter a valid email address"),
    ("contact.validation.phoneInvalid", "Please enter a valid phone number"),
    ("contact.validation.messageRequired", "Please enter a message"),
    ("contact.info.address", "Address"),
    ("contact.info.phone", "Phone"),
    ("contact.info.hours", "Working Hours"),
    ("notFound.title", "Page not found"),
    (
        "notFound.message",
        "The page you are looking for does not exist or has been moved.",
    ),
    ("notFound.home", "Back to home"),
    ("footer.tagline", "We build the web presence your business deserves."),
    ("footer.rights", "All rights reserved."),
];

// ==================== Bulgarian ====================

static BG: &[(&str, &str)] = &[
    ("nav.home", "Начало"),
    ("nav.services", "Услуги"),
    ("nav.portfolio", "Портфолио"),
    ("nav.blog", "Блог"),
    ("nav.contact", "Контакти"),
    ("hero.title", "Изграждаме сайтове, които развиват вашия бизнес"),
    (
        "hero.subtitle",
        "Дизайн, разработка и дигитален маркетинг за амбициозни компании",
    ),
    ("hero.cta", "Получете безплатна оферта"),
    ("meta.home.title", "WebBuilder - Уеб дизайн и дигитален маркетинг"),
    (
        "meta.home.description",
        "Професионална агенция за уеб дизайн, разработка и дигитален маркетинг в София.",
    ),
    ("meta.services.title", "Услуги - WebBuilder"),
    (
        "meta.services.description",
        "Уеб дизайн, онлайн магазини, мобилни приложения, SEO и дигитален маркетинг.",
    ),
    ("meta.portfolio.title", "Портфолио - WebBuilder"),
    (
        "meta.portfolio.description",
        "Избрани проекти, които сме проектирали, изградили и популяризирали.",
    ),
    ("meta.blog.title", "Блог - WebBuilder"),
    (
        "meta.blog.description",
        "Новини и практични съвети за уеб дизайн, SEO и онлайн маркетинг.",
    ),
    ("services.title", "Нашите услуги"),
    ("services.subtitle", "Всичко, от което вашият бизнес се нуждае онлайн"),
    ("services.categories.presence.title", "Онлайн присъствие"),
    (
        "services.categories.presence.description",
        "Сайтове, магазини и приложения, създадени за резултати",
    ),
    ("services.categories.seo.title", "Търсене и реклама"),
    (
        "services.categories.seo.description",
        "Бъдете намерени от клиентите, които вече ви търсят",
    ),
    ("services.categories.marketing.title", "Маркетинг и репутация"),
    (
        "services.categories.marketing.description",
        "Развийте аудиторията си и я задръжте лоялна",
    ),
    ("services.items.webDesign.title", "Уеб дизайн"),
    (
        "services.items.webDesign.description",
        "Модерни, бързи и мобилни сайтове",
    ),
    ("services.items.ecommerce.title", "Онлайн магазини"),
    (
        "services.items.ecommerce.description",
        "Цялостни e-commerce решения, които продават",
    ),
    ("services.items.mobileApps.title", "Мобилни приложения"),
    (
        "services.items.mobileApps.description",
        "Приложения за iOS и Android",
    ),
    ("services.items.googleAds.title", "Google реклама"),
    (
        "services.items.googleAds.description",
        "Кампании, които превръщат кликовете в клиенти",
    ),
    ("services.items.seoOptimization.title", "SEO оптимизация"),
    (
        "services.items.seoOptimization.description",
        "Устойчиви челни позиции в резултатите от търсене",
    ),
    ("services.items.googleMyBusiness.title", "Google My Business"),
    (
        "services.items.googleMyBusiness.description",
        "Откроете се на картата, където търсят местните клиенти",
    ),
    ("services.items.socialNetworks.title", "Социални мрежи"),
    (
        "services.items.socialNetworks.description",
        "Съдържание и управление на вашите профили",
    ),
    ("services.items.onlineReputation.title", "Онлайн репутация"),
    (
        "services.items.onlineReputation.description",
        "Управление на отзиви и доверие към вашата марка",
    ),
    ("services.items.emailMarketing.title", "Имейл маркетинг"),
    (
        "services.items.emailMarketing.description",
        "Кампании и автоматизации, които връщат клиентите",
    ),
    ("serviceDetail.back", "Всички услуги"),
    ("serviceDetail.featuresTitle", "Какво включва"),
    ("serviceDetail.cta", "Заявете тази услуга"),
    (
        "serviceDetail.webDesign.features.0",
        "Индивидуален дизайн според вашата марка",
    ),
    (
        "serviceDetail.webDesign.features.1",
        "Адаптивен изглед за всеки екран",
    ),
    ("serviceDetail.webDesign.features.2", "Бързо зареждане и чист код"),
    (
        "serviceDetail.ecommerce.features.0",
        "Продуктов каталог и управление на наличности",
    ),
    ("serviceDetail.ecommerce.features.1", "Сигурни онлайн плащания"),
    (
        "serviceDetail.ecommerce.features.2",
        "Интеграции за доставка и фактуриране",
    ),
    (
        "serviceDetail.seoOptimization.features.0",
        "Технически одит и on-page оптимизация",
    ),
    (
        "serviceDetail.seoOptimization.features.1",
        "Анализ на ключови думи и съдържателен план",
    ),
    (
        "serviceDetail.seoOptimization.features.2",
        "Месечни отчети за позициите",
    ),
    ("portfolio.title", "Нашата работа"),
    ("portfolio.subtitle", "Подбрани проекти, с които се гордеем"),
    ("blog.title", "Блог"),
    ("blog.subtitle", "Новини и съвети от нашия екип"),
    ("contact.title", "Да поговорим за вашия проект"),
    (
        "contact.subtitle",
        "Разкажете ни за идеята си и ще се свържем с вас до един работен ден.",
    ),
    ("contact.success", "Благодарим! Вашето съобщение беше изпратено."),
    ("contact.sendAnother", "Изпрати ново съобщение"),
    ("contact.form.name", "Име"),
    ("contact.form.phone", "Телефон"),
    ("contact.form.email", "Имейл"),
    ("contact.form.subject", "Тема"),
    ("contact.form.message", "Съобщение"),
    ("contact.form.submit", "Изпрати съобщение"),
    ("contact.form.subjects.webDesign", "Уеб дизайн"),
    ("contact.form.subjects.development", "Разработка"),
    ("contact.form.subjects.seo", "SEO"),
    ("contact.form.subjects.marketing", "Маркетинг"),
    ("contact.form.subjects.other", "Друго"),
    ("contact.validation.nameRequired", "Моля, въведете вашето име"),
    ("contact.validation.emailInvalid", "Моля, въведете валиден имейл адрес"),
    (
        "contact.validation.phoneInvalid",
        "Моля, въведете валиден телефонен номер",
    ),
    ("contact.validation.messageRequired", "Моля, въведете съобщение"),
    ("contact.info.address", "Адрес"),
    ("contact.info.phone", "Телефон"),
    ("contact.info.hours", "Работно време"),
    ("notFound.title", "Страницата не е намерена"),
    (
        "notFound.message",
        "Страницата, която търсите, не съществува или е преместена.",
    ),
    ("notFound.home", "Обратно към началото"),
    (
        "footer.tagline",
        "Изграждаме уеб присъствието, което вашият бизнес заслужава.",
    ),
    ("footer.rights", "Всички права запазени."),
];

// ==================== Russian ====================

static RU: &[(&str, &str)] = &[
    ("nav.home", "Главная"),
    ("nav.services", "Услуги"),
    ("nav.portfolio", "Портфолио"),
    ("nav.blog", "Блог"),
    ("nav.contact", "Контакты"),
    ("hero.title", "Создаём сайты, которые развивают ваш бизнес"),
    (
        "hero.subtitle",
        "Дизайн, разработка и диджитал-маркетинг для амбициозных компаний",
    ),
    ("hero.cta", "Получить бесплатную консультацию"),
    ("meta.home.title", "WebBuilder - Веб-дизайн и диджитал-маркетинг"),
    (
        "meta.home.description",
        "Профессиональное агентство веб-дизайна, разработки и диджитал-маркетинга в Софии.",
    ),
    ("meta.services.title", "Услуги - WebBuilder"),
    (
        "meta.services.description",
        "Веб-дизайн, интернет-магазины, мобильные приложения, SEO и диджитал-маркетинг.",
    ),
    ("meta.portfolio.title", "Портфолио - WebBuilder"),
    (
        "meta.portfolio.description",
        "Избранные проекты, которые мы спроектировали, создали и продвинули.",
    ),
    ("meta.blog.title", "Блог - WebBuilder"),
    (
        "meta.blog.description",
        "Новости и практичные советы о веб-дизайне, SEO и онлайн-маркетинге.",
    ),
    ("services.title", "Наши услуги"),
    ("services.subtitle", "Всё, что нужно вашему бизнесу для успеха онлайн"),
    ("services.categories.presence.title", "Онлайн-присутствие"),
    (
        "services.categories.presence.description",
        "Сайты, магазины и приложения, созданные для результата",
    ),
    ("services.categories.seo.title", "Поиск и реклама"),
    (
        "services.categories.seo.description",
        "Пусть вас найдут клиенты, которые уже ищут вас",
    ),
    ("services.categories.marketing.title", "Маркетинг и репутация"),
    (
        "services.categories.marketing.description",
        "Растите аудиторию и сохраняйте её лояльность",
    ),
    ("services.items.webDesign.title", "Веб-дизайн"),
    (
        "services.items.webDesign.description",
        "Современные, быстрые и мобильные сайты",
    ),
    ("services.items.ecommerce.title", "Интернет-магазины"),
    (
        "services.items.ecommerce.description",
        "Комплексные e-commerce решения, которые продают",
    ),
    ("services.items.mobileApps.title", "Мобильные приложения"),
    (
        "services.items.mobileApps.description",
        "Приложения для iOS и Android",
    ),
    ("services.items.googleAds.title", "Google Реклама"),
    (
        "services.items.googleAds.description",
        "Кампании, превращающие клики в клиентов",
    ),
    ("services.items.seoOptimization.title", "SEO-оптимизация"),
    (
        "services.items.seoOptimization.description",
        "Устойчивые первые позиции в результатах поиска",
    ),
    ("services.items.googleMyBusiness.title", "Google My Business"),
    (
        "services.items.googleMyBusiness.description",
        "Выделяйтесь на карте, где ищут местные клиенты",
    ),
    ("services.items.socialNetworks.title", "Социальные сети"),
    (
        "services.items.socialNetworks.description",
        "Контент и ведение ваших профилей",
    ),
    ("services.items.onlineReputation.title", "Онлайн-репутация"),
    (
        "services.items.onlineReputation.description",
        "Управление отзывами и доверием к вашему бренду",
    ),
    ("services.items.emailMarketing.title", "Email-маркетинг"),
    (
        "services.items.emailMarketing.description",
        "Кампании и автоматизации, возвращающие клиентов",
    ),
    ("serviceDetail.back", "Все услуги"),
    ("serviceDetail.featuresTitle", "Что входит"),
    ("serviceDetail.cta", "Заказать эту услугу"),
    (
        "serviceDetail.webDesign.features.0",
        "Индивидуальный дизайн под ваш бренд",
    ),
    (
        "serviceDetail.webDesign.features.1",
        "Адаптивная вёрстка для любого экрана",
    ),
    ("serviceDetail.webDesign.features.2", "Быстрая загрузка и чистый код"),
    (
        "serviceDetail.ecommerce.features.0",
        "Каталог товаров и управление остатками",
    ),
    ("serviceDetail.ecommerce.features.1", "Безопасные онлайн-платежи"),
    (
        "serviceDetail.ecommerce.features.2",
        "Интеграции доставки и выставления счетов",
    ),
    (
        "serviceDetail.seoOptimization.features.0",
        "Технический аудит и on-page оптимизация",
    ),
    (
        "serviceDetail.seoOptimization.features.1",
        "Подбор ключевых слов и контент-план",
    ),
    (
        "serviceDetail.seoOptimization.features.2",
        "Ежемесячные отчёты о позициях",
    ),
    ("portfolio.title", "Наши работы"),
    ("portfolio.subtitle", "Подборка проектов, которыми мы гордимся"),
    ("blog.title", "Блог"),
    ("blog.subtitle", "Новости и советы нашей команды"),
    ("contact.title", "Поговорим о вашем проекте"),
    (
        "contact.subtitle",
        "Расскажите о своей идее, и мы свяжемся с вами в течение одного рабочего дня.",
    ),
    ("contact.success", "Спасибо! Ваше сообщение отправлено."),
    ("contact.sendAnother", "Отправить новое сообщение"),
    ("contact.form.name", "Имя"),
    ("contact.form.phone", "Телефон"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Тема"),
    ("contact.form.message", "Сообщение"),
    ("contact.form.submit", "Отправить сообщение"),
    ("contact.form.subjects.webDesign", "Веб-дизайн"),
    ("contact.form.subjects.development", "Разработка"),
    ("contact.form.subjects.seo", "SEO"),
    ("contact.form.subjects.marketing", "Маркетинг"),
    ("contact.form.subjects.other", "Другое"),
    ("contact.validation.nameRequired", "Пожалуйста, введите ваше имя"),
    (
        "contact.validation.emailInvalid",
        "Пожалуйста, введите корректный email",
    ),
    (
        "contact.validation.phoneInvalid",
        "Пожалуйста, введите корректный номер телефона",
    ),
    ("contact.validation.messageRequired", "Пожалуйста, введите сообщение"),
    ("contact.info.address", "Адрес"),
    ("contact.info.phone", "Телефон"),
    ("contact.info.hours", "Рабочее время"),
    ("notFound.title", "Страница не найдена"),
    (
        "notFound.message",
        "Страница, которую вы ищете, не существует или была перемещена.",
    ),
    ("notFound.home", "Вернуться на главную"),
    (
        "footer.tagline",
        "Создаём веб-присутствие, которого заслуживает ваш бизнес.",
    ),
    ("footer.rights", "Все права защищены."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_english() {
        assert_eq!(lookup("nav.home", Language::ENGLISH), "Home");
        assert_eq!(
            lookup("contact.validation.emailInvalid", Language::ENGLISH),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_lookup_bulgarian() {
        assert_eq!(lookup("nav.home", Language::BULGARIAN), "Начало");
        assert_eq!(lookup("contact.form.name", Language::BULGARIAN), "Име");
    }

    #[test]
    fn test_lookup_russian() {
        assert_eq!(lookup("nav.home", Language::RUSSIAN), "Главная");
        assert_eq!(lookup("notFound.title", Language::RUSSIAN), "Страница не найдена");
    }

    #[test]
    fn test_lookup_missing_key_returns_key() {
        assert_eq!(lookup("no.such.key", Language::ENGLISH), "no.such.key");
        assert_eq!(lookup("no.such.key", Language::RUSSIAN), "no.such.key");
    }

    #[test]
    fn test_lookup_falls_back_to_english() {
        // blog.comingSoon is deliberately untranslated
        let english = lookup("blog.comingSoon", Language::ENGLISH);
        assert_eq!(lookup("blog.comingSoon", Language::BULGARIAN), english);
        assert_eq!(lookup("blog.comingSoon", Language::RUSSIAN), english);
    }

    #[test]
    fn test_try_lookup_miss_is_none() {
        assert!(try_lookup("no.such.key", Language::ENGLISH).is_none());
        assert!(try_lookup("serviceDetail.webDesign.features.3", Language::ENGLISH).is_none());
    }

    #[test]
    fn test_try_lookup_optional_feature_entries() {
        // Three features are defined for webDesign, none beyond
        for i in 0..3 {
            let key = format!("serviceDetail.webDesign.features.{i}");
            assert!(try_lookup(&key, Language::BULGARIAN).is_some());
        }
        assert!(try_lookup("serviceDetail.webDesign.features.3", Language::BULGARIAN).is_none());
    }

    // ==================== Dictionary Consistency Tests ====================

    #[test]
    fn test_no_empty_values() {
        for (key, value) in EN.iter().chain(BG.iter()).chain(RU.iter()) {
            assert!(!value.is_empty(), "empty value for key {key}");
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for dict in [EN, BG, RU] {
            let mut seen = HashSet::new();
            for (key, _) in dict {
                assert!(seen.insert(key), "duplicate key {key}");
            }
        }
    }

    #[test]
    fn test_translated_keys_exist_in_english() {
        let english: HashSet<_> = EN.iter().map(|(key, _)| *key).collect();
        for (key, _) in BG.iter().chain(RU.iter()) {
            assert!(english.contains(key), "orphan key {key} has no English source");
        }
    }

    #[test]
    fn test_validation_messages_translated_everywhere() {
        for key in [
            "contact.validation.nameRequired",
            "contact.validation.emailInvalid",
            "contact.validation.phoneInvalid",
            "contact.validation.messageRequired",
        ] {
            for lang in Language::all() {
                assert!(
                    table(lang).contains_key(key),
                    "{key} missing for {}",
                    lang.code()
                );
            }
        }
    }

    #[test]
    fn test_service_catalog_translated_everywhere() {
        for item in [
            "webDesign",
            "ecommerce",
            "mobileApps",
            "googleAds",
            "seoOptimization",
            "googleMyBusiness",
            "socialNetworks",
            "onlineReputation",
            "emailMarketing",
        ] {
            for lang in Language::all() {
                let title = format!("services.items.{item}.title");
                let description = format!("services.items.{item}.description");
                assert!(table(lang).contains_key(title.as_str()));
                assert!(table(lang).contains_key(description.as_str()));
            }
        }
    }
}
