//! Static site content.
//!
//! Every user-facing sentence on the page lives here as a `Bilingual` pair so
//! the renderer only decides layout. Brand names and tech labels that read
//! the same in both languages use `Bilingual::same`.

use crate::i18n::Bilingual;

// ==================== Identity ====================

pub const OWNER_NAME: &str = "Jiří Januš";
pub const OWNER_ALIAS: &str = "Dj Nejk";
pub const EMAIL: &str = "jiri.janus@djdevs.eu";
pub const PHONE_DISPLAY: &str = "+420 730 596 072";
pub const PHONE_TEL: &str = "+420730596072";
pub const SITE_NAME: &str = "DjDevs.eu";
pub const SITE_URL: &str = "https://djdevs.eu";
pub const FIRST_YEAR: i32 = 2025;
pub const SPIGOT_URL: &str = "https://www.spigotmc.org/resources/mysql-commands.123854/";
pub const SOCIAL_HANDLES: &str = "@djnejk • @nejkdj • Dj Nejk";

/// (year, month, day); the age pills are computed from it at render time
pub const BIRTH_DATE: (i32, u32, u32) = (2006, 3, 22);

/// Subject line prefilled in every mailto link (Czech in both languages)
pub const MAIL_SUBJECT: &str = "Poptávka z djdevs.eu";

pub const TITLE: Bilingual = Bilingual::same("Jiří Januš (Dj Nejk) | djdevs.eu");

pub const DESCRIPTION: Bilingual = Bilingual::new(
    "Osobní prezentace Jiřího Januše (Dj Nejk) — webové aplikace a prezentace, Minecraft pluginy, projekt Filmy pod Hvězdami, Run For Planet, ovládání MHD panelů a 3D tisk.",
    "Personal site of Jiří Januš (Dj Nejk) — websites & web apps, Minecraft plugins, Filmy pod Hvězdami, Run For Planet, public transport display control and 3D printing.",
);

pub const MAIL_BODY: Bilingual = Bilingual::new(
    "Ahoj Jiří,\n\nChci: \nTermín: \nOdkaz/inspirace: \nPoznámka: \n\nDíky!",
    "Hi Jiří,\n\nI need: \nDeadline: \nLinks/inspiration: \nNotes: \n\nThanks!",
);

// ==================== Navigation ====================

pub struct NavItem {
    pub anchor: &'static str,
    pub label: Bilingual,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { anchor: "about", label: Bilingual::new("O mně", "About") },
    NavItem { anchor: "projects", label: Bilingual::new("Projekty", "Projects") },
    NavItem { anchor: "skills", label: Bilingual::new("Dovednosti", "Skills") },
    NavItem { anchor: "gallery", label: Bilingual::new("Galerie", "Gallery") },
    NavItem { anchor: "contact", label: Bilingual::new("Kontakt", "Contact") },
];

pub const MESSAGE_ME: Bilingual = Bilingual::new("Napiš mi", "Message me");

// ==================== Hero ====================

pub const PROFILE_ALT: Bilingual = Bilingual::new("Profilová fotka", "Profile photo");
pub const LOCATION: Bilingual = Bilingual::new("Královehradecký kraj, CZ", "Hradec Králové Region, CZ");
pub const AGE_LABEL: Bilingual = Bilingual::new("Věk:", "Age:");
pub const FOCUS_PILL: Bilingual = Bilingual::new("Web apps • Projekty • Hardware", "Web apps • Projects • Hardware");
pub const GREETING: Bilingual = Bilingual::new("Ahoj, jsem", "Hi, I’m");

pub const HERO_LEAD: Bilingual = Bilingual::new(
    "Dělám webové prezentace a webové aplikace, píšu Minecraft pluginy a baví mě projekty, kde se potkává software s hardwarem — ovládání MHD informačních panelů a 3D tisk.",
    "I build websites and web apps, develop Minecraft plugins, and I enjoy projects where software meets hardware — public transport display control and 3D printing.",
);

pub const SPIGOT_BUTTON: Bilingual = Bilingual::same("Spigot plugin");

pub const HERO_STACK: &[&str] = &["PHP", "JS", "MySQL", "Bootstrap"];

// ==================== Quick Overview ====================

pub struct OverviewItem {
    pub icon: &'static str,
    pub title: Bilingual,
    pub text: Bilingual,
}

pub const OVERVIEW_TITLE: Bilingual = Bilingual::new("Rychlý přehled", "Quick overview");

pub const OVERVIEW_ITEMS: &[OverviewItem] = &[
    OverviewItem {
        icon: "bi-window-stack",
        title: Bilingual::new("Weby & webové aplikace", "Websites & web apps"),
        text: Bilingual::new(
            "Prezentace, registrace, formuláře, admin, databáze.",
            "Websites, registrations, forms, admin panels, databases.",
        ),
    },
    OverviewItem {
        icon: "bi-people",
        title: Bilingual::new("Projekty s kamarády", "Projects with friends"),
        text: Bilingual::same("Filmy pod Hvězdami • Run For Planet."),
    },
    OverviewItem {
        icon: "bi-hdd-network",
        title: Bilingual::new("MHD panely", "Transport displays"),
        text: Bilingual::new(
            "Vlastní ovladač, elektronika + software.",
            "Custom controller, electronics + software.",
        ),
    },
    OverviewItem {
        icon: "bi-printer",
        title: Bilingual::new("3D tisk", "3D printing"),
        text: Bilingual::new(
            "Prototypy i velké projekty (např. socha 1:1).",
            "From prototypes to large builds (e.g., 1:1 statue).",
        ),
    },
];

pub const OVERVIEW_TIP: Bilingual = Bilingual::new(
    "Tip: Klikni na projekty dole — je tam web i registrace pro běhy.",
    "Tip: Check the projects below — there’s a website + registration app.",
);

// ==================== Socials ====================

pub struct SocialLink {
    pub icon: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "bi-instagram",
        name: "Instagram",
        url: "https://www.instagram.com/djnejk/",
    },
    SocialLink {
        icon: "bi-facebook",
        name: "Facebook",
        url: "https://www.facebook.com/nejkdj/",
    },
];

// ==================== About ====================

pub const ABOUT_TITLE: Bilingual = Bilingual::new("O mně", "About me");
pub const ABOUT_SUBTITLE: Bilingual = Bilingual::new(
    "Krátce a přehledně — co dělám a na čem pracuju.",
    "Clear overview — what I do and what I’m building.",
);
pub const BIO_TITLE: Bilingual = Bilingual::same("Bio");

pub const BIO_PARAGRAPHS: &[Bilingual] = &[
    Bilingual::new(
        "Jmenuju se Jiří Januš (Dj Nejk) a baví mě tvořit věci, které lidi reálně používají — webové prezentace, webové aplikace a různé custom projekty.",
        "My name is Jiří Januš (Dj Nejk). I enjoy building things people actually use — websites, web apps, and custom projects.",
    ),
    Bilingual::new(
        "S kamarády děláme na projektu Filmy pod Hvězdami — v létě děláme letní kino pod širým nebem. Další projekt je Run For Planet: charitativní běhy, kde je potřeba řešit web i registrace.",
        "With my friends, we run Filmy pod Hvězdami — an open-air summer cinema project. Another project is Run For Planet: charity runs that need a website and online registration.",
    ),
    Bilingual::new(
        "Kromě webu mě baví i hardware: vyvíjím vlastní ovladač pro MHD informační panely a věnuju se 3D tisku (od prototypů až po velké výtisky).",
        "Besides web development, I also enjoy hardware: I’m developing a custom controller for public transport information displays and I do 3D printing (from prototypes to large prints).",
    ),
];

pub struct Highlight {
    pub icon: &'static str,
    pub title: Bilingual,
    pub text: Bilingual,
}

pub const BIO_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "bi-check2-circle",
        title: Bilingual::new("Co umím dodat", "What I can deliver"),
        text: Bilingual::new(
            "Prezentace, webové aplikace (registrace/formuláře/admin), nasazení a údržba, Minecraft pluginy.",
            "Websites, web apps (registrations/forms/admin), deployment & maintenance, Minecraft plugins.",
        ),
    },
    Highlight {
        icon: "bi-rocket-takeoff",
        title: Bilingual::new("Co mě baví nejvíc", "What I enjoy most"),
        text: Bilingual::new(
            "Praktické projekty, automatizace a propojení software ↔ hardware.",
            "Practical projects, automation, and software ↔ hardware integration.",
        ),
    },
];

pub struct Fact {
    pub icon: &'static str,
    pub text: Bilingual,
}

pub const FACTS_TITLE: Bilingual = Bilingual::new("Rychlá fakta", "Quick facts");

/// Rendered after the age line, which is filled in client-side
pub const FACTS: &[Fact] = &[
    Fact {
        icon: "bi-geo",
        text: Bilingual::new("Královehradecký kraj (CZ).", "Hradec Králové Region (CZ)."),
    },
    Fact {
        icon: "bi-mortarboard",
        text: Bilingual::new(
            "SPŠ/SOŠ/SOU Hradec Králové — elektrotechnika.",
            "Technical high school — Electrical engineering (HK).",
        ),
    },
    Fact {
        icon: "bi-lightning",
        text: Bilingual::new(
            "Focus: web apps, projekty, pluginy, hardware.",
            "Focus: web apps, projects, plugins, hardware.",
        ),
    },
];

pub const COLLABORATION_TITLE: Bilingual = Bilingual::new("Jak spolupráce probíhá", "How collaboration works");

pub const COLLABORATION_STEPS: &[Bilingual] = &[
    Bilingual::new(
        "Napíšeš mi co potřebuješ (co, do kdy, odkaz/inspirace).",
        "You message me what you need (what, deadline, links/inspiration).",
    ),
    Bilingual::new("Navrhnu řešení + domluvíme rozsah.", "I propose a solution and scope."),
    Bilingual::new(
        "Dodám první verzi, vyladíme detaily.",
        "I deliver a first version and we polish details.",
    ),
    Bilingual::new(
        "Nasazení + domluvená údržba/úpravy.",
        "Deployment + agreed maintenance/updates.",
    ),
];

// ==================== Projects ====================

pub struct ProjectCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: Bilingual,
    pub url: &'static str,
    pub badge: Bilingual,
}

pub const PROJECTS_TITLE: Bilingual = Bilingual::new("Projekty a reference", "Projects & work");
pub const PROJECTS_SUBTITLE: Bilingual = Bilingual::new(
    "Ukázky toho, co jsem dělal (weby, aplikace, projekty).",
    "Examples of what I’ve built (websites, apps, projects).",
);
pub const OPEN_LINK: Bilingual = Bilingual::new("Otevřít", "Open");

pub const PROJECT_CARDS: &[ProjectCard] = &[
    ProjectCard {
        icon: "bi-film",
        title: "filmypodhvezdami.cz",
        text: Bilingual::new(
            "Filmy pod Hvězdami — letní kino pod širým nebem. Dělám web a věci kolem online prezentace.",
            "Filmy pod Hvězdami — open-air summer cinema. I work on the website and online presence.",
        ),
        url: "http://filmypodhvezdami.cz/",
        badge: Bilingual::new("Projekt", "Project"),
    },
    ProjectCard {
        icon: "bi-tree",
        title: "runforplanet.cz",
        text: Bilingual::new(
            "Run For Planet — charitativní běhy. Webová prezentace projektu + info pro běžce.",
            "Run For Planet — charity runs. Website with event info for runners.",
        ),
        url: "https://www.runforplanet.cz/",
        badge: Bilingual::new("Projekt", "Project"),
    },
    ProjectCard {
        icon: "bi-ui-checks",
        title: "dsb.runforplanet.cz",
        text: Bilingual::new(
            "Online registrace na běhy — webová aplikace pro přihlášení (a další funkce podle potřeby).",
            "Online registration app for runs — web application for sign-up (and more features as needed).",
        ),
        url: "https://dsb.runforplanet.cz/",
        badge: Bilingual::same("Web app"),
    },
    ProjectCard {
        icon: "bi-building",
        title: "obeclibrice.cz",
        text: Bilingual::new(
            "Obec Libřice — webová prezentace + část funkčnosti jako aplikace.",
            "Municipality of Libřice — website plus application functionality.",
        ),
        url: "https://obeclibrice.cz/",
        badge: Bilingual::same("Web"),
    },
];

/// Wider cards below the project grid.
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: Bilingual,
    pub badge: Bilingual,
    pub text: Bilingual,
    /// Bootstrap column class
    pub column: &'static str,
    pub link: Option<&'static str>,
    pub tags: &'static [Bilingual],
}

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: "bi-boxes",
        title: Bilingual::new("Minecraft pluginy (Spigot)", "Minecraft plugins (Spigot)"),
        badge: Bilingual::same("Plugin"),
        text: Bilingual::new(
            "Vlastní plugin + věci na míru. Ukázka: MySQL Commands (SpigotMC).",
            "Custom plugins + tailored features. Example: MySQL Commands (SpigotMC).",
        ),
        column: "col-lg-6",
        link: Some(SPIGOT_URL),
        tags: &[],
    },
    FeatureCard {
        icon: "bi-cpu",
        title: Bilingual::new("Ovladač MHD informačních panelů", "Public transport display controller"),
        badge: Bilingual::same("Hardware"),
        text: Bilingual::new(
            "Vyvíjím vlastní ovladač pro informační panely z MHD — od elektroniky až po software. (Fotky najdeš v galerii.)",
            "I’m developing my own controller for public transport information displays — from electronics to software. (Photos in gallery.)",
        ),
        column: "col-lg-6",
        link: None,
        tags: &[],
    },
    FeatureCard {
        icon: "bi-printer",
        title: Bilingual::new("3D tisk", "3D printing"),
        badge: Bilingual::same("Maker"),
        text: Bilingual::new(
            "Tisknu prototypy i velké projekty. Největší projekt: tisk sochy pro youtubera MenT v životní velikosti (fotky v galerii).",
            "From prototypes to large builds. Biggest project: a life-size statue print for YouTuber MenT (see gallery).",
        ),
        column: "col-12",
        link: None,
        tags: &[
            Bilingual::same("2× Creality Ender S1"),
            Bilingual::same("CR-10 (32-bit mod)"),
            Bilingual::new("Socha 1:1", "1:1 statue"),
        ],
    },
];

// ==================== Skills ====================

pub struct SkillGroup {
    pub icon: &'static str,
    pub title: Bilingual,
    pub tags: &'static [&'static str],
    pub note: Bilingual,
    pub column: &'static str,
}

pub const SKILLS_TITLE: Bilingual = Bilingual::new("Dovednosti", "Skills");
pub const SKILLS_SUBTITLE: Bilingual = Bilingual::new(
    "Co používám a v čem se pohybuju.",
    "Tools and stack I actually use.",
);

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        icon: "bi-braces",
        title: Bilingual::same("Daily"),
        tags: &["HTML", "CSS", "JavaScript", "PHP", "MySQL", "Bootstrap", "jQuery", "REST/API"],
        note: Bilingual::new(
            "Každodenní práce na webech a aplikacích.",
            "My day-to-day web & app stack.",
        ),
        column: "col-md-6 col-lg-4",
    },
    SkillGroup {
        icon: "bi-layers",
        title: Bilingual::new("Také", "Also"),
        tags: &["Java", "C++", "C#", "Linux", "Hardware tinkering"],
        note: Bilingual::new(
            "Další jazyky a věci, které umím použít.",
            "Other languages and tools I can use.",
        ),
        column: "col-md-6 col-lg-4",
    },
    SkillGroup {
        icon: "bi-tools",
        title: Bilingual::new("Nástroje", "Tools"),
        tags: &["VS Code", "Visual Studio", "IntelliJ IDEA", "Git (basic)", "Synology", "Adobe"],
        note: Bilingual::new(
            "Umím i nasazení a základní správu/údržbu podle domluvy.",
            "I can also handle deployment and basic maintenance as needed.",
        ),
        column: "col-md-12 col-lg-4",
    },
];

// ==================== Gallery ====================

pub struct GalleryItem {
    pub file: &'static str,
    pub label: Bilingual,
    pub caption: Bilingual,
}

impl GalleryItem {
    /// File name shown when the image is missing
    pub fn basename(&self) -> &'static str {
        self.file.rsplit('/').next().unwrap_or(self.file)
    }
}

pub const GALLERY_TITLE: Bilingual = Bilingual::new("Galerie", "Gallery");
pub const GALLERY_SUBTITLE: Bilingual = Bilingual::new(
    "Fotky projektů (klikni pro zvětšení).",
    "Project photos (click to view).",
);
pub const MISSING_FILE: Bilingual = Bilingual::new("Chybí soubor", "Missing file");

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        file: "assets/mhd-panel-1.jpg",
        label: Bilingual::new("MHD panel", "Display"),
        caption: Bilingual::new("MHD ovladač — prototyp", "Display controller — prototype"),
    },
    GalleryItem {
        file: "assets/mhd-panel-2.jpg",
        label: Bilingual::new("MHD panel", "Display"),
        caption: Bilingual::new("MHD ovladač — detail", "Display controller — details"),
    },
    GalleryItem {
        file: "assets/3d-ment-1.jpg",
        label: Bilingual::new("3D tisk", "3D print"),
        caption: Bilingual::new("Socha — tisk", "Statue — printing"),
    },
    GalleryItem {
        file: "assets/3d-ment-2.jpg",
        label: Bilingual::new("3D tisk", "3D print"),
        caption: Bilingual::new("Socha — hotovo", "Statue — finished"),
    },
];

pub const GALLERY_TIP: Bilingual = Bilingual::new(
    "Tip: Profilovku dej jako assets/profile.jpg (ideálně čtverec, min. 600×600).",
    "Tip: Put your profile photo as assets/profile.jpg (square recommended, min 600×600).",
);

pub const MODAL_TIP: Bilingual = Bilingual::new(
    "Tip: Pokud se obrázek nenačte, nahraj ho do složky assets a zkontroluj název souboru.",
    "Tip: If the image doesn’t load, upload it to the assets folder and verify the filename.",
);

// ==================== Contact ====================

pub const CONTACT_TITLE: Bilingual = Bilingual::new("Kontakt", "Contact");
pub const CONTACT_LEAD: Bilingual = Bilingual::new(
    "Chceš web, aplikaci nebo plugin? Napiš mi. Nejvíc pomůže, když pošleš co chceš udělat, do kdy a případně ukázku/inspiraci.",
    "Need a website, web app, or a plugin? Message me. It helps if you include what you need, deadline, and a link/inspiration.",
);
pub const EMAIL_LABEL: Bilingual = Bilingual::new("E-mail", "Email");
pub const PHONE_LABEL: Bilingual = Bilingual::new("Telefon", "Phone");
pub const SOCIALS_LABEL: Bilingual = Bilingual::new("Sociální sítě", "Socials");

pub const BRIEF_TITLE: Bilingual = Bilingual::new("Rychlé zadání", "Quick brief");
pub const BRIEF_INTRO: Bilingual = Bilingual::new(
    "Když mi napíšeš, pošli ideálně:",
    "When you message me, ideally include:",
);
pub const BRIEF_ITEMS: &[Bilingual] = &[
    Bilingual::new(
        "co chceš vytvořit (web / aplikace / plugin)",
        "what you want (website / app / plugin)",
    ),
    Bilingual::new("termín (do kdy)", "deadline"),
    Bilingual::new("odkaz/inspiraci + co se ti líbí", "links/inspiration + what you like"),
    Bilingual::new("případně rozpočet (volitelné)", "budget (optional)"),
];
pub const SEND_EMAIL: Bilingual = Bilingual::new("Napsat e-mail", "Send email");
pub const VIEW_PROJECTS: Bilingual = Bilingual::new("Mrknout na projekty", "View projects");
pub const REPLY_NOTE: Bilingual = Bilingual::new(
    "Odpovídám co nejdřív, většinou ten samý den.",
    "I reply as soon as possible, usually the same day.",
);

// ==================== Footer ====================

pub const MADE_WITH_LOVE: Bilingual = Bilingual::new("S láskou ❤️ vytvořilo", "Made with love ❤️ by");
