// RSS rendering

use crate::error::FeedError;
use crate::feed::{Podcast, Settings};

use minijinja::value::Value;
use minijinja::{Environment, ErrorKind, Output, State};
use std::path::PathBuf;

/// The built-in RSS 2.0 template
pub const DEFAULT_TEMPLATE: &str = include_str!("feed.template.rss");

const TEMPLATE_NAME: &str = "feed.xml";

/// Render `podcast` through `source`
///
/// Every interpolated value is escaped for XML, so titles taken from tags can
/// contain `&` or `<` safely. Values marked `|safe` are written as-is.
pub fn render_feed(podcast: &Podcast, source: &str) -> Result<String, FeedError> {
    let mut env = Environment::new();
    env.set_formatter(xml_formatter);
    env.add_template(TEMPLATE_NAME, source)?;

    let rendered = env.get_template(TEMPLATE_NAME)?.render(podcast)?;
    Ok(rendered)
}

fn xml_formatter(
    out: &mut Output<'_>,
    _state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    let written = if value.is_undefined() || value.is_none() {
        Ok(())
    } else if value.is_safe() {
        out.write_str(&value.to_string())
    } else {
        out.write_str(&escape_xml(&value.to_string()))
    };

    written.map_err(|_| {
        minijinja::Error::new(ErrorKind::WriteFailure, "failed to write feed output")
    })
}

/// Replace the five XML special characters with entities
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the feed with the configured template and write it under the root
pub fn write_feed(settings: &Settings, podcast: &Podcast) -> Result<PathBuf, FeedError> {
    let source = match &settings.template {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let rendered = render_feed(podcast, &source)?;
    let output = settings.root.join(&settings.feed_path);
    std::fs::write(&output, rendered)?;

    tracing::info!(path = %output.display(), episodes = podcast.episodes.len(), "wrote feed");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::Episode;

    fn podcast(episodes: Vec<Episode>) -> Podcast {
        Podcast {
            link: "https://example.com/feed.xml".into(),
            title: "Daily".into(),
            description: "Readings".into(),
            build_date: "Mon, 02 Jan 2006 15:04:05 +0000".into(),
            episodes,
        }
    }

    #[test]
    fn renders_channel_and_items() {
        let episode = Episode {
            url: "https://example.com/ep1.mp3".into(),
            title: "[Jane]Hello".into(),
            description: "[Jane]Hello".into(),
            pub_date: "Mon, 02 Jan 2006 15:04:05 +0000".into(),
            file_size: 40_000,
            duration: 10.0,
        };

        let xml = render_feed(&podcast(vec![episode]), DEFAULT_TEMPLATE).unwrap();
        assert!(xml.contains("<title>Daily</title>"));
        assert!(xml.contains("<title>[Jane]Hello</title>"));
        assert!(xml.contains("length=\"40000\""));
        assert!(xml.contains("<itunes:duration>10</itunes:duration>"));
    }

    #[test]
    fn values_are_escaped() {
        let episode = Episode {
            url: "https://example.com/a&b.mp3".into(),
            title: "Q&A <live>".into(),
            description: "Q&A <live>".into(),
            pub_date: String::new(),
            file_size: 0,
            duration: 0.0,
        };

        let xml = render_feed(&podcast(vec![episode]), DEFAULT_TEMPLATE).unwrap();
        assert!(xml.contains("Q&amp;A &lt;live&gt;"));
        assert!(!xml.contains("Q&A"));
        assert!(xml.contains("https://example.com/a&amp;b.mp3"));
    }

    #[test]
    fn xml_escaping() {
        assert_eq!(
            escape_xml(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("plain/text"), "plain/text");
    }

    #[test]
    fn custom_template() {
        let xml = render_feed(&podcast(Vec::new()), "{{ title }}:{{ episodes|length }}").unwrap();
        assert_eq!(xml, "Daily:0");
    }

    #[test]
    fn bad_template_is_an_error() {
        let err = render_feed(&podcast(Vec::new()), "{% for %}").unwrap_err();
        assert!(matches!(err, FeedError::Template(_)));
    }
}
