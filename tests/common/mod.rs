//! HTML fixture generators for channel listing pages.
//!
//! Each generator returns the raw markup and the normalized fragment the
//! extractor is expected to produce for it.

#![allow(dead_code)]

pub const PUB_DATE: &str = "2021-01-01T00:00:00+00:00";
pub const LINK: &str = "https://t.me/channel/1";
pub const AUTHOR: &str = "Test author";

/// A link preview card and its expected quote block (with leading newline).
pub fn preview(
    site_name: &str,
    link: &str,
    description: &str,
    title: Option<&str>,
    image: Option<&str>,
) -> (String, String) {
    let title_html = title
        .map(|t| format!(r#"<div class="link_preview_title" dir="auto">{t}</div>"#))
        .unwrap_or_default();
    let image_html = image
        .map(|i| format!(r#"<i class="link_preview_image" style="background-image:url('{i}')"></i>"#))
        .unwrap_or_default();
    let image_feed = image
        .map(|i| format!(r#"<img src="{i}" referrerpolicy="no-referrer">"#))
        .unwrap_or_default();

    let raw = format!(
        r#"
        <a class="tgme_widget_message_link_preview" href="{link}">
        {title_html}
        <div class="link_preview_site_name accent_color" dir="auto">{site_name}</div>
        {image_html}
        <div class="link_preview_description" dir="auto">{description}</div>
        </a>
    "#
    );

    let shown_title = title.unwrap_or(site_name);
    let feed = format!(
        "\n<blockquote>
        <b>{site_name}</b><br>
        <b><a href=\"{link}\">{shown_title}</a></b><br>
        <p>{description}</p>
        {image_feed}
    </blockquote>"
    );

    (raw, feed)
}

/// A reply node and its expected quote block (with trailing newline).
pub fn reply(text: &str, author: &str, link: &str) -> (String, String) {
    let raw = format!(
        r#"
        <a class="tgme_widget_message_reply" href="{link}" >
            <div class="tgme_widget_message_author accent_color">
                <span class="tgme_widget_message_author_name">{author}</span>
            </div>
            <div class="tgme_widget_message_text js-message_reply_text">{text}</div>
        </a>
    "#
    );

    let feed = format!(
        r#"<div class="rsshub-quote">
        <blockquote>
            <p><a href="{link}"><b>{author}</b>:</a></p>
            <p>{text}</p>
        </blockquote>
    </div>
"#
    );

    (raw, feed)
}

/// Optional parts of a generated message.
#[derive(Default)]
pub struct Parts<'a> {
    pub images: &'a [&'a str],
    pub reply: Option<(String, String)>,
    pub preview: Option<(String, String)>,
    pub video: bool,
    pub forwarded_from: Option<&'a str>,
}

/// A full message wrapper plus its expected `(title, description)`.
pub fn message(description: &str, parts: &Parts) -> (String, String, String) {
    let images_html: String = parts
        .images
        .iter()
        .map(|i| {
            format!(r#"<a class="tgme_widget_message_photo_wrap" style="background-image:url('{i}')"></a>"#)
        })
        .collect();

    let video_html = if parts.video {
        r#"
            <a class="tgme_widget_message_video_player js-message_video_player"
                href="https://t.me/channel/0"><i class="tgme_widget_message_video_thumb"
                style="background-image:url('https://cdn4.telegram-cdn.org/file/preview_image')"></i>
            <div class="tgme_widget_message_video_wrap">
                <video src="https://cdn4.telegram-cdn.org/file/video.mp4?token=token"
                    class="tgme_widget_message_video js-message_video"></video>
            </div>
            </a>
        "#
    } else {
        ""
    };

    let forwarded_html = parts
        .forwarded_from
        .map(|name| {
            format!(
                r#"<div class="tgme_widget_message_forwarded_from accent_color">Forwarded from
                <a class="tgme_widget_message_forwarded_from_name" href="https://t.me/other">
                <span class="tgme_widget_message_from_author">{name}</span></a></div>"#
            )
        })
        .unwrap_or_default();

    let (reply_html, reply_feed) = parts.reply.clone().unwrap_or_default();
    let (preview_html, preview_feed) = parts.preview.clone().unwrap_or_default();

    let raw = format!(
        r#"
        <div class="tgme_widget_message_wrap js-widget_message_wrap">
            <div class="tgme_widget_message text_not_supported_wrap js-widget_message">
            <div class="tgme_widget_message_bubble">
            <div class="tgme_widget_message_author accent_color">
                <a class="tgme_widget_message_owner_name" href="https://t.me/channel">{AUTHOR}</a>
            </div>
            {forwarded_html}
            <div class="tgme_widget_message_grouped_wrap js-message_grouped_wrap">
                <div class="tgme_widget_message_grouped js-message_grouped">
                    <div class="tgme_widget_message_grouped_layer js-message_grouped_layer">
                        {images_html}
                    </div>
                </div>
            </div>
            {reply_html}
            <div class="tgme_widget_message_text js-message_text" dir="auto">{description}</div>
            {preview_html}
            {video_html}
            <div class="tgme_widget_message_footer compact js-message_footer">
                <div class="tgme_widget_message_info short js-message_info">
                    <span class="tgme_widget_message_meta">
                        <a class="tgme_widget_message_date" href="{LINK}">
                            <time class="time" datetime="{PUB_DATE}">00:00</time>
                        </a>
                    </span>
                </div>
            </div>
            </div>
            </div>
        </div>
"#
    );

    let mut base = description.to_string();
    if let Some(first) = parts.images.first() {
        base.push_str(&format!("\n<img src=\"{first}\" referrerpolicy=\"no-referrer\">"));
    }
    let title: String = base.chars().take(80).chain("...".chars()).collect();
    let expected = format!("{reply_feed}{base}{preview_feed}");

    (raw, title, expected)
}

/// Wrap message markup in a listing page with channel metadata.
pub fn page(messages: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta property="og:title" content="Test channel">
    <meta property="og:description" content="Channel about tests">
</head>
<body>
    <section class="tgme_channel_history js-message_history">
    {messages}
    </section>
</body>
</html>"#
    )
}
