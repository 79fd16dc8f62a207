//! Page templates and the minijinja environment that renders them.
//!
//! Templates are embedded at compile time. Names ending in `.html` and `.xml`
//! are autoescaped.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use minijinja::value::Value;
use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;

use crate::domain::{Note, NoteId, time_ago_secs};
use crate::web::markdown::markdown_to_html;

pub const LAYOUT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}{{ site_title }}{% endblock %}</title>
    <link rel="stylesheet" href="/static/style.css">
    <link rel="alternate" type="application/rss+xml" title="{{ site_title }}" href="/rss">
</head>
<body>
    <header class="site">
        <h1><a href="/">{{ site_title }}</a></h1>
        <nav>
            <a href="/search"{% if path == "/search" %} aria-current="page"{% endif %}>Search</a>
            <a href="/rss">RSS</a>
            {% if auth %}
            <a href="/edit">New note</a>
            <a href="/logout">Log out</a>
            {% else %}
            <a href="/login">Log in</a>
            {% endif %}
        </nav>
    </header>
    <main>
        {% block content %}{% endblock %}
    </main>
    <footer>
        <p>&copy; {{ year }} {{ site_title }}</p>
    </footer>
</body>
</html>"##;

pub const NOTE_CARD_TEMPLATE: &str = r##"<article class="note">
    <h2><a href="/note/{{ note.id }}">{{ note.display_title }}</a></h2>
    {% if note.url %}<div class="url"><a href="{{ note.url }}" rel="noopener noreferrer">{{ note.url }}</a></div>{% endif %}
    {% if note.quote %}<blockquote>{{ note.quote }}</blockquote>{% endif %}
    {% if note.note %}<div class="body">{{ note.note | markdown }}</div>{% endif %}
    <div class="metadata">
        <time datetime="{{ note.timestamp | date_format("%Y-%m-%dT%H:%M:%SZ") }}" title="{{ note.timestamp | date_format("%Y-%m-%d %H:%M") }}">{{ note.timestamp | time_ago }} ago</time>
    </div>
</article>"##;

pub const INDEX_TEMPLATE: &str = r##"{% extends "layout.html" %}
{% block content %}
{% for note in notes %}
{% include "note_card.html" %}
{% else %}
<p>No notes yet.</p>
{% endfor %}
{% if pages > 1 %}
<nav class="pagination" aria-label="Pages">
    {% if has_previous %}<a href="/?p={{ page - 1 }}">&larr; Newer</a>{% else %}<span></span>{% endif %}
    <span>Page {{ page }} of {{ pages }}</span>
    {% if has_next %}<a href="/?p={{ page + 1 }}">Older &rarr;</a>{% else %}<span></span>{% endif %}
</nav>
{% endif %}
{% endblock %}"##;

pub const NOTE_TEMPLATE: &str = r##"{% extends "layout.html" %}
{% block title %}{{ note.display_title }} - {{ site_title }}{% endblock %}
{% block content %}
{% include "note_card.html" %}
{% if auth %}
<div class="actions">
    <a href="/edit?id={{ note.id }}">Edit</a>
    <form method="post" action="/delete/{{ note.id }}">
        <button class="danger" type="submit">Delete</button>
    </form>
</div>
{% endif %}
<nav class="neighbors" aria-label="Neighbouring notes">
    {% if previous_id %}<a href="/note/{{ previous_id }}" rel="prev">&larr; Previous</a>{% else %}<span></span>{% endif %}
    {% if next_id %}<a href="/note/{{ next_id }}" rel="next">Next &rarr;</a>{% else %}<span></span>{% endif %}
</nav>
{% endblock %}"##;

pub const SEARCH_TEMPLATE: &str = r##"{% extends "layout.html" %}
{% block title %}Search - {{ site_title }}{% endblock %}
{% block content %}
<form method="get" action="/search" role="search">
    <input type="text" name="q" value="{{ q }}" placeholder="Search notes" autofocus>
    <button type="submit">Search</button>
</form>
<p class="metadata">{{ label }}</p>
{% for note in results %}
{% include "note_card.html" %}
{% endfor %}
{% endblock %}"##;

pub const EDIT_TEMPLATE: &str = r##"{% extends "layout.html" %}
{% block title %}{% if id %}Edit{% else %}New note{% endif %} - {{ site_title }}{% endblock %}
{% block content %}
<form method="post" action="/edit">
    <input type="hidden" name="id" value="{{ id }}">
    <label for="url">URL</label>
    <input type="url" id="url" name="url" value="{{ note.url }}">
    <label for="title">Title</label>
    <input type="text" id="title" name="title" value="{{ note.title }}">
    <label for="quote">Quote</label>
    <textarea id="quote" name="quote">{{ note.quote }}</textarea>
    <label for="note">Note</label>
    <textarea id="note" name="note">{{ note.note }}</textarea>
    <button type="submit">Save</button>
</form>
{% endblock %}"##;

pub const LOGIN_TEMPLATE: &str = r##"{% extends "layout.html" %}
{% block title %}Log in - {{ site_title }}{% endblock %}
{% block content %}
<form method="post" action="/login">
    <label for="key">Password</label>
    <input type="password" id="key" name="key" autofocus>
    <button type="submit">Log in</button>
</form>
{% endblock %}"##;

pub const RSS_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
    <title>{{ site_title }}</title>
    <link>{{ base_url }}/</link>
    <description>Latest notes from {{ site_title }}</description>
    <lastBuildDate>{{ last_build | rfc2822 }}</lastBuildDate>
    {% for note in notes %}
    <item>
        <title>{{ note.display_title }}</title>
        <link>{{ base_url }}/note/{{ note.id }}</link>
        <guid isPermaLink="true">{{ base_url }}/note/{{ note.id }}</guid>
        <pubDate>{{ note.timestamp | rfc2822 }}</pubDate>
        <description>{% if note.quote %}{{ note.quote }}

{% endif %}{{ note.note }}</description>
    </item>
    {% endfor %}
</channel>
</rss>"##;

/// A note as seen by templates.
#[derive(Debug, Serialize)]
pub struct NoteView<'a> {
    pub id: String,
    pub timestamp: u64,
    pub url: &'a str,
    pub title: &'a str,
    pub quote: &'a str,
    pub note: &'a str,
    pub display_title: &'a str,
}

impl<'a> NoteView<'a> {
    pub fn new(id: &NoteId, note: &'a Note) -> Self {
        Self {
            id: id.to_string(),
            timestamp: id.as_secs(),
            url: &note.url,
            title: &note.title,
            quote: &note.quote,
            note: &note.note,
            display_title: note.display_title(),
        }
    }

    /// Builds views for a listing of `(id, note)` pairs.
    pub fn list(entries: &[(&NoteId, &'a Note)]) -> Vec<Self> {
        entries.iter().map(|(id, note)| Self::new(id, note)).collect()
    }
}

/// The template environment with every page registered.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Builds the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_TEMPLATE)?;
        env.add_template("note_card.html", NOTE_CARD_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        env.add_template("note.html", NOTE_TEMPLATE)?;
        env.add_template("search.html", SEARCH_TEMPLATE)?;
        env.add_template("edit.html", EDIT_TEMPLATE)?;
        env.add_template("login.html", LOGIN_TEMPLATE)?;
        env.add_template("rss.xml", RSS_TEMPLATE)?;

        env.add_filter("time_ago", time_ago_filter);
        env.add_filter("date_format", date_format_filter);
        env.add_filter("rfc2822", rfc2822_filter);
        env.add_filter("markdown", markdown_filter);

        Ok(Self { env })
    }

    /// Renders the named template.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

fn datetime(ts: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("timestamp {ts} is out of range"),
        )
    })
}

fn time_ago_filter(ts: i64) -> String {
    time_ago_secs(ts, Utc::now().timestamp())
}

fn date_format_filter(ts: i64, format: &str) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", datetime(ts)?.format(format)).map_err(|_| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid date format '{format}'"),
        )
    })?;
    Ok(out)
}

fn rfc2822_filter(ts: i64) -> Result<String, Error> {
    Ok(datetime(ts)?.to_rfc2822())
}

fn markdown_filter(text: &str) -> Value {
    Value::from_safe_string(markdown_to_html(text))
}
