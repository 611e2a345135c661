//! The shared page skeleton. Rendering takes a typed [`PageContext`] and
//! substitutes every field in a single formatting pass; there is no
//! templating language and no escaping beyond what the inputs provide.
//! Also holds the built-in defaults used to seed missing required inputs.

pub const PREV_LABEL: &str = "←prev";
pub const NEXT_LABEL: &str = "next→";

/// Everything the skeleton needs for one page. Hrefs are relative to the
/// page's own location (see [`crate::nav::Location`]); `prev_link` and
/// `next_link` are already-rendered markup from [`link_markup`].
pub struct PageContext<'a> {
    pub site_title: &'a str,
    pub page_title: &'a str,
    pub author: &'a str,
    pub copyright: &'a str,
    pub stylesheet_href: &'a str,
    pub index_href: &'a str,
    pub archive_href: &'a str,
    pub about_href: &'a str,
    pub prev_link: &'a str,
    pub next_link: &'a str,
    pub source_href: &'a str,
}

/// An anchor when a target exists, the bare label otherwise.
pub fn link_markup(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, href, label),
        None => label.to_owned(),
    }
}

/// Wraps a converted document body in the full page skeleton.
pub fn render_page(ctx: &PageContext, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="generator" content="chronica" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="author" content="{author}" />
  <title>{site_title} - {page_title}</title>
  <link rel="stylesheet" href="{stylesheet_href}" />
</head>
<body>

<div id="content">

<div id="header"><a href="{index_href}">{site_title}</a></div>

<div id="article-box">

<div id="top-nav">
  <div>{prev_link}</div>
  <div class="nav-middle">
    <a href="{about_href}">about</a> | <a href="{archive_href}">archive</a>
  </div>
  <div class="nav-right">{next_link}</div>
</div>

<div id="article-content">
{body}
</div>

<div id="bottom-nav">
  <div>{prev_link}</div>
  <div class="nav-right">{next_link}</div>
</div>

</div>

<div id="footer">
{copyright}
<a href="{source_href}">Markdown source for this page</a>
</div>

</div>

</body>
</html>
"#,
        site_title = ctx.site_title,
        page_title = ctx.page_title,
        author = ctx.author,
        copyright = ctx.copyright,
        stylesheet_href = ctx.stylesheet_href,
        index_href = ctx.index_href,
        archive_href = ctx.archive_href,
        about_href = ctx.about_href,
        prev_link = ctx.prev_link,
        next_link = ctx.next_link,
        source_href = ctx.source_href,
        body = body,
    )
}

/// The starter document written to the source directory when it is empty
/// and defaults were requested.
pub fn starter_document(site_title: &str, date: &str) -> String {
    format!(
        r#"<p class="dateline">{date}</p>

# {site_title}

This starter document was generated because the source directory was empty.

  * add your own markdown files to the `md/` directory to begin writing
  * this file can be deleted once you have posts of your own
  * the archive page is regenerated from scratch on every build
"#
    )
}

/// The stylesheet written to `css/styles.css` when it is missing and
/// defaults were requested.
pub const DEFAULT_STYLESHEET: &str = r#"* {
    box-sizing: border-box;
}

html {
    font-family: "Helvetica", "Arial", sans-serif;
}

body {
    color: #222;
    line-height: 1.25;
    background-color: #fff;
}

#content {
    max-width: 600px;
    margin: auto;
}

#header {
    font-weight: bold;
    font-size: x-large;
    text-align: center;
    padding: 5px 10px 5px 10px;
}

#header a {
    text-decoration: none;
}

#top-nav, #bottom-nav {
    font-size: small;
    display: flex;
    padding: 5px 10px 5px 10px;
    border-bottom: 1px solid #ddd;
}

.nav-right {
    margin-left: auto;
}

.nav-middle {
    margin-left: auto;
    text-align: center;
}

.dateline {
    font-size: small;
    line-height: 0.25em;
}

#article-content {
    padding: 5px 10px 5px 10px;
}

#footer {
    padding: 10px;
    font-size: small;
}

a:link {
    color: #3A4089;
}

code {
    background-color: #eee;
}

pre {
    background-color: #eee;
    border: 1px solid #ddd;
    padding: 5px 2px 5px 6px;
}

blockquote {
    padding: 2px 16px;
}

h1 {
    font-size: x-large;
}

h2 {
    font-size: large;
}

h1, h2, h3, h4, h5, h6 {
    color: #3A4089;
}

h3, h4, h5, h6 {
    font-style: italic;
}
"#;
