//! HTML rendering for the library page.

use std::fmt::Write;

use vidshelf_catalog::CatalogEntry;

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the library page listing `entries`, each playable from
/// `{video_route}/{index}`.
pub fn render_index<'a>(
    entries: impl IntoIterator<Item = CatalogEntry<'a>>,
    video_route: &str,
    rendered_at: &str,
) -> String {
    let mut items = String::new();
    let mut count = 0usize;
    for entry in entries {
        count += 1;
        let src = format!("{}/{}", video_route, entry.index);
        // No `type` for unknown media; the browser sniffs it.
        let type_attr = entry
            .mime_type
            .map(|mime| format!(r#" type="{}""#, escape_html(mime)))
            .unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = write!(
            items,
            r#"      <li>
        <details>
          <summary><span class="index">{index}</span> {name}</summary>
          <video controls preload="none">
            <source src="{src}"{type_attr}>
          </video>
        </details>
      </li>
"#,
            index = entry.index,
            name = escape_html(entry.display_name),
            src = escape_html(&src),
        );
    }

    let body = if count == 0 {
        "    <p class=\"empty\">No videos found.</p>\n".to_string()
    } else {
        format!("    <ol>\n{items}    </ol>\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>vidshelf</title>
    <style>
      body {{ font-family: sans-serif; margin: 2rem; }}
      ol {{ list-style: none; padding: 0; }}
      li {{ margin: 0.5rem 0; }}
      .index {{ color: #888; }}
      video {{ max-width: 100%; margin-top: 0.5rem; }}
    </style>
  </head>
  <body>
    <h1>vidshelf</h1>
    <p class="meta">{count} videos &middot; rendered {rendered_at}</p>
{body}  </body>
</html>
"#,
        rendered_at = escape_html(rendered_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn renders_entries_in_order() {
        let entries = vec![
            CatalogEntry {
                index: 1,
                display_name: "ep1.mp4",
                mime_type: Some("video/mp4"),
            },
            CatalogEntry {
                index: 2,
                display_name: "season 2 ▶ <ep2>.mkv",
                mime_type: None,
            },
        ];

        let html = render_index(entries, "/video", "2026-01-01 00:00:00");
        let first = html.find(r#"src="/video/1""#).unwrap();
        let second = html.find(r#"src="/video/2""#).unwrap();
        assert!(first < second);
        assert!(html.contains("season 2 ▶ &lt;ep2&gt;.mkv"));
        assert!(html.contains(r#"<source src="/video/1" type="video/mp4">"#));
        assert!(html.contains(r#"<source src="/video/2">"#));
        assert!(!html.contains("application/octet-stream"));
        assert!(html.contains("2 videos"));
        assert!(html.contains("2026-01-01 00:00:00"));
    }

    #[test]
    fn renders_empty_state() {
        let html = render_index(Vec::new(), "/video", "now");
        assert!(html.contains("No videos found."));
        assert!(!html.contains("<ol>"));
    }
}
