//! Page sections, top to bottom. Each returns a finished HTML fragment.

use super::{escape_html, rawurlencode, PageContext};
use crate::content::{self, GalleryItem};
use crate::i18n::{switch_url, Language};
use chrono::{Datelike, NaiveDate};

pub(super) fn head(ctx: &PageContext<'_>) -> String {
    format!(
        r##"<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <meta name="description" content="{description}" />
  <meta name="theme-color" content="#05060a" />
  <link rel="icon" type="image/png" href="/assets/favicon/favicon-96x96.png" sizes="96x96" />
  <link rel="icon" type="image/svg+xml" href="/assets/favicon/favicon.svg" />
  <link rel="shortcut icon" href="/assets/favicon/favicon.ico" />
  <link rel="apple-touch-icon" sizes="180x180" href="/assets/favicon/apple-touch-icon.png" />
  <link rel="manifest" href="/assets/favicon/site.webmanifest" />
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
  <link href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css" rel="stylesheet">
  <link href="/assets/site.css" rel="stylesheet">
</head>"##,
        title = ctx.pick(&content::TITLE),
        description = ctx.pick(&content::DESCRIPTION),
    )
}

fn switch_button(ctx: &PageContext<'_>, target: Language) -> String {
    let active = if ctx.language() == target { " active" } else { "" };
    format!(
        r#"<a hreflang="{code}" lang="{code}" title="{native}" class="btn btn-sm btn-outline-light{active}" href="{href}">{label}</a>"#,
        code = target.code(),
        native = escape_html(target.native_name()),
        active = active,
        href = switch_url(ctx.request_uri, target),
        label = target.switch_label(),
    )
}

pub(super) fn nav(ctx: &PageContext<'_>) -> String {
    let links: String = content::NAV_ITEMS
        .iter()
        .map(|item| {
            format!(
                r##"<li class="nav-item"><a class="nav-link text-white-50" href="#{}">{}</a></li>"##,
                item.anchor,
                ctx.pick(&item.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    let switcher: String = Language::all()
        .into_iter()
        .map(|lang| switch_button(ctx, lang))
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r##"<nav class="navbar navbar-expand-lg fixed-top">
    <div class="container">
      <a class="navbar-brand text-white fw-semibold" href="#top">{site}</a>
      <button class="navbar-toggler text-white border-0" type="button" data-bs-toggle="collapse" data-bs-target="#nav">
        <span class="navbar-toggler-icon"></span>
      </button>
      <div class="collapse navbar-collapse" id="nav">
        <ul class="navbar-nav ms-auto align-items-lg-center gap-lg-2 mt-3 mt-lg-0">
          {links}
          <li class="nav-item ms-lg-2">
            <div class="btn-group" role="group" aria-label="{switcher_label}">
              {switcher}
            </div>
          </li>
          <li class="nav-item ms-lg-2">
            <a class="btn btn-sm btn-accent text-dark fw-semibold" href="#contact">
              <i class="bi bi-chat-dots"></i><span class="ms-1">{message_me}</span>
            </a>
          </li>
        </ul>
      </div>
    </div>
  </nav>"##,
        site = content::SITE_NAME,
        links = links,
        switcher_label = ctx.t("Přepínač jazyka", "Language switcher"),
        switcher = switcher,
        message_me = ctx.pick(&content::MESSAGE_ME),
    )
}

/// Completed years between `birth` and `today`.
pub(super) fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birth).unwrap_or(0)
}

fn current_age(ctx: &PageContext<'_>) -> u32 {
    let (year, month, day) = content::BIRTH_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|birth| age_on(birth, ctx.today))
        .unwrap_or(0)
}

pub(super) fn hero(ctx: &PageContext<'_>) -> String {
    let stack = content::HERO_STACK
        .iter()
        .map(|tech| format!(r#"<span class="kbd">{}</span>"#, escape_html(tech)))
        .collect::<Vec<_>>()
        .join(r#" <span class="mx-1">+</span> "#);

    let overview: String = content::OVERVIEW_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<div class="d-flex gap-3">
                <div class="fs-4"><i class="bi {icon}"></i></div>
                <div>
                  <div class="fw-semibold">{title}</div>
                  <div class="muted2">{text}</div>
                </div>
              </div>"#,
                icon = item.icon,
                title = ctx.pick(&item.title),
                text = ctx.pick(&item.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r##"<header id="top" class="hero">
    <div class="container">
      <div class="row g-4 align-items-stretch">
        <div class="col-lg-8">
          <div class="p-4 p-md-5 hero-card h-100">
            <div class="profile-wrap mb-3">
              <img class="profile-img" src="/assets/profile.jpg" alt="{profile_alt}">
              <div>
                <div class="d-flex flex-wrap gap-2 mb-2">
                  <span class="pill"><i class="bi bi-geo-alt me-1"></i>{location}</span>
                  <span class="pill"><i class="bi bi-calendar3 me-1"></i>{age_label} <span id="age">{age}</span></span>
                  <span class="pill"><i class="bi bi-lightning-charge me-1"></i>{focus}</span>
                </div>
                <h1 class="display-6 fw-semibold mb-1">
                  {greeting}
                  <span class="text-white">{name}</span>
                  <span class="muted2">({alias})</span>
                </h1>
                <div class="muted2">{email} • {phone}</div>
              </div>
            </div>
            <p class="lead muted mb-4">{lead}</p>
            <div class="d-flex flex-wrap gap-2">
              <a class="btn btn-accent text-dark fw-semibold" href="#projects">
                <i class="bi bi-stars"></i><span class="ms-1">{projects}</span>
              </a>
              <a class="btn btn-outline-light" href="#contact">
                <i class="bi bi-envelope"></i><span class="ms-1">{contact}</span>
              </a>
              <a class="btn btn-outline-light" href="{spigot_url}" target="_blank" rel="noreferrer">
                <i class="bi bi-boxes"></i><span class="ms-1">{spigot}</span>
              </a>
            </div>
            <div class="mt-4 muted2">{stack}</div>
          </div>
        </div>
        <div class="col-lg-4">
          <div class="card-soft p-4 p-md-5 h-100">
            <h2 class="h5 fw-semibold section-title mb-3">{overview_title}</h2>
            <div class="d-grid gap-3">
              {overview}
              <hr class="hr-soft my-1">
              <div class="d-flex flex-wrap gap-2">
                {socials}
              </div>
              <div class="muted2 small">{tip}</div>
            </div>
          </div>
        </div>
      </div>
    </div>
  </header>"##,
        profile_alt = ctx.pick(&content::PROFILE_ALT),
        location = ctx.pick(&content::LOCATION),
        age_label = ctx.pick(&content::AGE_LABEL),
        age = current_age(ctx),
        focus = ctx.pick(&content::FOCUS_PILL),
        greeting = ctx.pick(&content::GREETING),
        name = escape_html(content::OWNER_NAME),
        alias = escape_html(content::OWNER_ALIAS),
        email = content::EMAIL,
        phone = content::PHONE_DISPLAY,
        lead = ctx.pick(&content::HERO_LEAD),
        projects = ctx.t("Projekty", "Projects"),
        contact = ctx.t("Kontakt", "Contact"),
        spigot_url = escape_html(content::SPIGOT_URL),
        spigot = ctx.pick(&content::SPIGOT_BUTTON),
        stack = stack,
        overview_title = ctx.pick(&content::OVERVIEW_TITLE),
        overview = overview,
        socials = social_buttons("ms-1"),
        tip = ctx.pick(&content::OVERVIEW_TIP),
    )
}

fn social_buttons(label_class: &str) -> String {
    content::SOCIAL_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a class="btn btn-sm btn-outline-light" href="{url}" target="_blank" rel="noreferrer"><i class="bi {icon}"></i><span class="{class}">{name}</span></a>"#,
                url = escape_html(link.url),
                icon = link.icon,
                class = label_class,
                name = escape_html(link.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ")
}

pub(super) fn about(ctx: &PageContext<'_>) -> String {
    let paragraphs: String = content::BIO_PARAGRAPHS
        .iter()
        .map(|text| format!(r#"<p class="muted mb-3">{}</p>"#, ctx.pick(text)))
        .collect::<Vec<_>>()
        .join("\n            ");

    let highlights: String = content::BIO_HIGHLIGHTS
        .iter()
        .map(|item| {
            format!(
                r#"<div class="col-md-6">
                <div class="fw-semibold mb-1"><i class="bi {icon} me-2"></i>{title}</div>
                <div class="muted2">{text}</div>
              </div>"#,
                icon = item.icon,
                title = ctx.pick(&item.title),
                text = ctx.pick(&item.text),
            )
        })
        .collect::<Vec<_>>()
        .join("\n              ");

    let facts: String = content::FACTS
        .iter()
        .map(|fact| {
            format!(
                r#"<li class="mb-2"><i class="bi {} me-2"></i>{}</li>"#,
                fact.icon,
                ctx.pick(&fact.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n              ");

    let steps: String = content::COLLABORATION_STEPS
        .iter()
        .map(|step| format!(r#"<li class="mb-2">{}</li>"#, ctx.pick(step)))
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r#"<section id="about" class="py-5">
    <div class="container">
      <div class="d-flex align-items-end justify-content-between flex-wrap gap-2 mb-3">
        <h2 class="h4 fw-semibold section-title mb-0">{title}</h2>
        <div class="muted2">{subtitle}</div>
      </div>
      <div class="row g-4">
        <div class="col-lg-7">
          <div class="card-soft p-4 p-md-5">
            <h3 class="h5 fw-semibold mb-3">{bio_title}</h3>
            {paragraphs}
            <hr class="hr-soft my-4">
            <div class="row g-3">
              {highlights}
            </div>
          </div>
        </div>
        <div class="col-lg-5">
          <div class="card-soft p-4 p-md-5 mb-4">
            <h3 class="h5 fw-semibold mb-3">{facts_title}</h3>
            <ul class="list-unstyled mb-0 muted">
              <li class="mb-2"><i class="bi bi-person-badge me-2"></i>{age_label} <span id="age2">{age}</span></li>
              {facts}
            </ul>
          </div>
          <div class="card-soft p-4 p-md-5">
            <h3 class="h5 fw-semibold mb-3">{collab_title}</h3>
            <ol class="muted mb-0">
              {steps}
            </ol>
          </div>
        </div>
      </div>
    </div>
  </section>"#,
        title = ctx.pick(&content::ABOUT_TITLE),
        subtitle = ctx.pick(&content::ABOUT_SUBTITLE),
        bio_title = ctx.pick(&content::BIO_TITLE),
        paragraphs = paragraphs,
        highlights = highlights,
        facts_title = ctx.pick(&content::FACTS_TITLE),
        age_label = ctx.pick(&content::AGE_LABEL),
        age = current_age(ctx),
        facts = facts,
        collab_title = ctx.pick(&content::COLLABORATION_TITLE),
        steps = steps,
    )
}

fn open_link(ctx: &PageContext<'_>, url: &str) -> String {
    format!(
        r#"<a class="link-soft" href="{}" target="_blank" rel="noreferrer"><i class="bi bi-box-arrow-up-right me-1"></i>{}</a>"#,
        escape_html(url),
        ctx.pick(&content::OPEN_LINK)
    )
}

pub(super) fn projects(ctx: &PageContext<'_>) -> String {
    let cards: String = content::PROJECT_CARDS
        .iter()
        .map(|card| {
            format!(
                r#"<div class="col-md-6 col-lg-3">
          <div class="card-soft p-4 h-100">
            <div class="d-flex align-items-start justify-content-between gap-2 mb-2">
              <div class="d-flex align-items-center gap-2">
                <i class="bi {icon} fs-4"></i>
                <div class="fw-semibold">{title}</div>
              </div>
              <span class="tag">{badge}</span>
            </div>
            <p class="muted2 mb-3">{text}</p>
            {link}
          </div>
        </div>"#,
                icon = escape_html(card.icon),
                title = escape_html(card.title),
                badge = ctx.pick(&card.badge),
                text = ctx.pick(&card.text),
                link = open_link(ctx, card.url),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let features: String = content::FEATURE_CARDS
        .iter()
        .map(|card| {
            let link = card.link.map(|url| open_link(ctx, url)).unwrap_or_default();
            let tags = if card.tags.is_empty() {
                String::new()
            } else {
                let spans = card
                    .tags
                    .iter()
                    .map(|tag| format!(r#"<span class="tag">{}</span>"#, ctx.pick(tag)))
                    .collect::<Vec<_>>()
                    .join("");
                format!(r#"<div class="d-flex flex-wrap gap-2">{}</div>"#, spans)
            };
            format!(
                r#"<div class="{column}">
          <div class="card-soft p-4 h-100">
            <div class="d-flex align-items-center gap-2 mb-2">
              <i class="bi {icon} fs-4"></i>
              <div class="fw-semibold">{title}</div>
              <span class="tag ms-auto">{badge}</span>
            </div>
            <p class="muted2 mb-3">{text}</p>
            {link}{tags}
          </div>
        </div>"#,
                column = card.column,
                icon = card.icon,
                title = ctx.pick(&card.title),
                badge = ctx.pick(&card.badge),
                text = ctx.pick(&card.text),
                link = link,
                tags = tags,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section id="projects" class="py-5">
    <div class="container">
      <div class="d-flex align-items-end justify-content-between flex-wrap gap-2 mb-3">
        <h2 class="h4 fw-semibold section-title mb-0">{title}</h2>
        <div class="muted2">{subtitle}</div>
      </div>
      <div class="row g-4">
        {cards}
        {features}
      </div>
    </div>
  </section>"#,
        title = ctx.pick(&content::PROJECTS_TITLE),
        subtitle = ctx.pick(&content::PROJECTS_SUBTITLE),
        cards = cards,
        features = features,
    )
}

pub(super) fn skills(ctx: &PageContext<'_>) -> String {
    let groups: String = content::SKILL_GROUPS
        .iter()
        .map(|group| {
            let tags = group
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
                .collect::<Vec<_>>()
                .join("");
            format!(
                r#"<div class="{column}">
          <div class="card-soft p-4 h-100">
            <div class="d-flex align-items-center gap-2 mb-2">
              <i class="bi {icon} fs-4"></i>
              <div class="fw-semibold">{title}</div>
            </div>
            <div class="skill-tags">{tags}</div>
            <div class="muted2 small mt-2">{note}</div>
          </div>
        </div>"#,
                column = group.column,
                icon = group.icon,
                title = ctx.pick(&group.title),
                tags = tags,
                note = ctx.pick(&group.note),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section id="skills" class="py-5">
    <div class="container">
      <div class="d-flex align-items-end justify-content-between flex-wrap gap-2 mb-3">
        <h2 class="h4 fw-semibold section-title mb-0">{title}</h2>
        <div class="muted2">{subtitle}</div>
      </div>
      <div class="row g-4">
        {groups}
      </div>
    </div>
  </section>"#,
        title = ctx.pick(&content::SKILLS_TITLE),
        subtitle = ctx.pick(&content::SKILLS_SUBTITLE),
        groups = groups,
    )
}

fn gallery_item(ctx: &PageContext<'_>, item: &GalleryItem) -> String {
    let file = escape_html(item.file);
    let label = ctx.pick(&item.label);
    format!(
        r##"<div class="col-6 col-lg-3">
          <div class="gallery-item" data-bs-toggle="modal" data-bs-target="#imgModal" data-img="/{file}" data-caption="{caption}">
            <span class="gallery-badge"><i class="bi bi-image me-1"></i>{label}</span>
            <img src="/{file}" alt="{label}" onerror="this.style.display='none'; this.closest('.gallery-item').querySelector('.gallery-fallback').style.display='flex';">
            <div class="gallery-fallback">
              <div>
                <i class="bi bi-image fs-3"></i>
                <div class="mt-2">{label}</div>
                <div class="small muted2 mt-1">{missing}:<br><span class="kbd">{basename}</span></div>
              </div>
            </div>
          </div>
        </div>"##,
        file = file,
        caption = ctx.pick(&item.caption),
        label = label,
        missing = ctx.pick(&content::MISSING_FILE),
        basename = escape_html(item.basename()),
    )
}

pub(super) fn gallery(ctx: &PageContext<'_>) -> String {
    let items: String = content::GALLERY_ITEMS
        .iter()
        .map(|item| gallery_item(ctx, item))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<section id="gallery" class="py-5">
    <div class="container">
      <div class="d-flex align-items-end justify-content-between flex-wrap gap-2 mb-3">
        <h2 class="h4 fw-semibold section-title mb-0">{title}</h2>
        <div class="muted2">{subtitle}</div>
      </div>
      <div class="row g-3">
        {items}
      </div>
      <div class="mt-3 muted2">{tip}</div>
    </div>
  </section>"#,
        title = ctx.pick(&content::GALLERY_TITLE),
        subtitle = ctx.pick(&content::GALLERY_SUBTITLE),
        items = items,
        tip = ctx.pick(&content::GALLERY_TIP),
    )
}

/// `mailto:` href with a prefilled subject and optional body, escaped for an attribute.
pub(super) fn mailto_href(subject: &str, body: Option<&str>) -> String {
    let mut href = format!("mailto:{}?subject={}", content::EMAIL, rawurlencode(subject));
    if let Some(body) = body {
        href.push_str("&body=");
        href.push_str(&rawurlencode(body));
    }
    escape_html(&href)
}

pub(super) fn contact(ctx: &PageContext<'_>) -> String {
    let brief: String = content::BRIEF_ITEMS
        .iter()
        .map(|item| format!("<li>{}</li>", ctx.pick(item)))
        .collect::<Vec<_>>()
        .join("\n              ");

    format!(
        r##"<section id="contact" class="py-5">
    <div class="container">
      <div class="row g-4">
        <div class="col-lg-6">
          <div class="card-soft p-4 p-md-5 h-100">
            <h2 class="h4 fw-semibold section-title mb-3">{title}</h2>
            <p class="muted mb-4">{lead}</p>
            <div class="d-grid gap-3">
              <div class="d-flex align-items-center gap-3">
                <div class="fs-4"><i class="bi bi-envelope"></i></div>
                <div>
                  <div class="muted2">{email_label}</div>
                  <a class="link-soft" href="{mail_plain}">{email}</a>
                </div>
              </div>
              <div class="d-flex align-items-center gap-3">
                <div class="fs-4"><i class="bi bi-telephone"></i></div>
                <div>
                  <div class="muted2">{phone_label}</div>
                  <a class="link-soft" href="tel:{phone_tel}">{phone}</a>
                </div>
              </div>
              <div class="d-flex align-items-center gap-3">
                <div class="fs-4"><i class="bi bi-share"></i></div>
                <div>
                  <div class="muted2">{socials_label}</div>
                  <div class="d-flex flex-wrap gap-2 mt-1">
                    {socials}
                  </div>
                  <div class="muted2 mt-2">{handles}</div>
                </div>
              </div>
            </div>
          </div>
        </div>
        <div class="col-lg-6">
          <div class="card-soft p-4 p-md-5 h-100">
            <h3 class="h5 fw-semibold mb-3">{brief_title}</h3>
            <div class="muted2 mb-2">{brief_intro}</div>
            <ul class="muted">
              {brief}
            </ul>
            <hr class="hr-soft my-4">
            <div class="d-flex flex-wrap gap-2">
              <a class="btn btn-accent text-dark fw-semibold" href="{mail_brief}">
                <i class="bi bi-send"></i><span class="ms-2">{send_email}</span>
              </a>
              <a class="btn btn-outline-light" href="#projects">
                <i class="bi bi-stars"></i><span class="ms-2">{view_projects}</span>
              </a>
            </div>
            <div class="muted2 small mt-3">{reply_note}</div>
          </div>
        </div>
      </div>
    </div>
  </section>"##,
        title = ctx.pick(&content::CONTACT_TITLE),
        lead = ctx.pick(&content::CONTACT_LEAD),
        email_label = ctx.pick(&content::EMAIL_LABEL),
        mail_plain = mailto_href(content::MAIL_SUBJECT, None),
        email = content::EMAIL,
        phone_label = ctx.pick(&content::PHONE_LABEL),
        phone_tel = content::PHONE_TEL,
        phone = content::PHONE_DISPLAY,
        socials_label = ctx.pick(&content::SOCIALS_LABEL),
        socials = social_buttons("ms-2"),
        handles = escape_html(content::SOCIAL_HANDLES),
        brief_title = ctx.pick(&content::BRIEF_TITLE),
        brief_intro = ctx.pick(&content::BRIEF_INTRO),
        brief = brief,
        mail_brief = mailto_href(
            content::MAIL_SUBJECT,
            Some(ctx.translator.pick(&content::MAIL_BODY))
        ),
        send_email = ctx.pick(&content::SEND_EMAIL),
        view_projects = ctx.pick(&content::VIEW_PROJECTS),
        reply_note = ctx.pick(&content::REPLY_NOTE),
    )
}

pub(super) fn footer(ctx: &PageContext<'_>) -> String {
    let version = ctx
        .version
        .map(|v| format!(r#"<p class="site-version">{}</p>"#, escape_html(v)))
        .unwrap_or_default();

    format!(
        r#"<footer class="footer">
    <div class="container d-flex flex-wrap justify-content-between align-items-center gap-2">
      <p class="text-center">© {first}-{year} {site} - {love} <a target="_blank" href="{url}" rel="noopener">{site}</a></p>
      {version}
    </div>
  </footer>"#,
        first = content::FIRST_YEAR,
        year = ctx.today.year(),
        site = content::SITE_NAME,
        love = ctx.pick(&content::MADE_WITH_LOVE),
        url = content::SITE_URL,
        version = version,
    )
}

pub(super) fn modal(ctx: &PageContext<'_>) -> String {
    format!(
        r#"<div class="modal fade" id="imgModal" tabindex="-1" aria-hidden="true">
    <div class="modal-dialog modal-dialog-centered modal-lg">
      <div class="modal-content">
        <div class="modal-header border-0">
          <h5 class="modal-title">{title}</h5>
          <button type="button" class="btn-close btn-close-white" data-bs-dismiss="modal" aria-label="{close}"></button>
        </div>
        <div class="modal-body pt-0">
          <img id="imgModalEl" src="" alt="" class="img-fluid rounded">
          <div class="muted2 mt-3" id="imgModalCaption"></div>
          <div class="muted2 mt-2">{tip}</div>
        </div>
      </div>
    </div>
  </div>"#,
        title = ctx.pick(&content::GALLERY_TITLE),
        close = ctx.t("Zavřít", "Close"),
        tip = ctx.pick(&content::MODAL_TIP),
    )
}

/// Bootstrap bundle plus the handler that loads the clicked gallery image into
/// the modal. Must come after `modal()` in the document.
pub(super) fn scripts() -> &'static str {
    r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"></script>
  <script>
    document.getElementById("imgModal").addEventListener("show.bs.modal", function (e) {
      var trigger = e.relatedTarget;
      if (!trigger) return;
      document.getElementById("imgModalEl").setAttribute("src", trigger.getAttribute("data-img") || "");
      document.getElementById("imgModalCaption").textContent = trigger.getAttribute("data-caption") || "";
    });
  </script>"#
}
