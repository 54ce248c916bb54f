//! Server-rendered lookup page / Halaman pencarian kamus
//!
//! GET /?q=<word>&direction=<bugis->id|id->bugis>
//! One HTML page: the lookup form, and when a query was sent, the ranked
//! results with a badge per match tier.

use axum::extract::{Query, State};
use axum::response::Html;
use std::sync::Arc;

use kamus_bugis::config;
use kamus_bugis::kamus::{Direction, MatchKind, MatchResult};

use super::search::SearchParams;
use crate::state::AppState;

/// Lookup page / Halaman pencarian
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let direction = Direction::from_param(&params.direction);
    let app_config = config::config();

    let results = if params.q.is_empty() {
        Vec::new()
    } else {
        state
            .engine
            .search(&params.q, direction, app_config.search.max_results)
    };

    Html(render_page(
        &app_config.site.title,
        &params.q,
        direction,
        &results,
    ))
}

/// Badge style per match tier / Gaya lencana per tingkat kecocokan
fn kind_class(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Contains => "contains",
        MatchKind::Fuzzy => "fuzzy",
    }
}

/// Render the whole page / Susun seluruh halaman
///
/// An empty `q` renders the bare form; a non-empty one adds the result
/// section, with a notice when nothing matched. All interpolated text is
/// HTML-escaped.
fn render_page(title: &str, q: &str, direction: Direction, results: &[MatchResult]) -> String {
    let (bugis_to_id_selected, id_to_bugis_selected) = match direction {
        Direction::BugisToIndonesian => (" selected", ""),
        Direction::IndonesianToBugis => ("", " selected"),
    };

    let results_section = if q.is_empty() {
        String::new()
    } else if results.is_empty() {
        format!(
            r#"        <h2>Hasil untuk &quot;{}&quot;</h2>
        <p class="empty">Tidak ada hasil.</p>
"#,
            escape_html(q)
        )
    } else {
        let mut items = String::new();
        for result in results {
            let (source, target) = match direction {
                Direction::BugisToIndonesian => (result.bugis, result.indonesian),
                Direction::IndonesianToBugis => (result.indonesian, result.bugis),
            };
            items.push_str(&format!(
                "            <li><span class=\"badge {}\">{}</span> <strong>{}</strong> &ndash; {}</li>\n",
                kind_class(result.kind),
                result.kind.label(),
                escape_html(source),
                escape_html(target),
            ));
        }
        format!(
            r#"        <h2>Hasil untuk &quot;{}&quot; ({})</h2>
        <ul class="results">
{}        </ul>
"#,
            escape_html(q),
            results.len(),
            items
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; }}
        .container {{ max-width: 640px; margin: 40px auto; background: white; padding: 32px; border-radius: 12px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }}
        h1 {{ margin-top: 0; font-size: 1.5em; }}
        form {{ display: flex; gap: 8px; margin-bottom: 24px; }}
        input[type="text"] {{ flex: 1; padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px; }}
        select, button {{ padding: 8px 12px; border: 1px solid #ccc; border-radius: 6px; background: white; }}
        button {{ background: #1976d2; color: white; border: none; cursor: pointer; }}
        ul.results {{ list-style: none; padding: 0; }}
        ul.results li {{ padding: 8px 0; border-bottom: 1px solid #eee; }}
        .badge {{ display: inline-block; min-width: 72px; text-align: center; font-size: 0.7em; padding: 2px 6px; border-radius: 4px; color: white; margin-right: 8px; }}
        .badge.exact {{ background: #43a047; }}
        .badge.contains {{ background: #fb8c00; }}
        .badge.fuzzy {{ background: #757575; }}
        .empty {{ color: #757575; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <form method="get" action="/">
            <input type="text" name="q" value="{q}" placeholder="Masukkan kata..." autofocus>
            <select name="direction">
                <option value="bugis-&gt;id"{bugis_to_id_selected}>Bugis &rarr; Indonesia</option>
                <option value="id-&gt;bugis"{id_to_bugis_selected}>Indonesia &rarr; Bugis</option>
            </select>
            <button type="submit">Cari</button>
        </form>
{results_section}    </div>
</body>
</html>"#,
        title = escape_html(title),
        q = escape_html(q),
        bugis_to_id_selected = bugis_to_id_selected,
        id_to_bugis_selected = id_to_bugis_selected,
        results_section = results_section,
    )
}

/// Minimal HTML escaping for text and attribute values / Pelarian HTML
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("iye"), "iye");
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_kind_class() {
        assert_eq!(kind_class(MatchKind::Exact), "exact");
        assert_eq!(kind_class(MatchKind::Contains), "contains");
        assert_eq!(kind_class(MatchKind::Fuzzy), "fuzzy");
    }

    #[test]
    fn test_render_bare_form() {
        let page = render_page("Kamus", "", Direction::BugisToIndonesian, &[]);

        assert!(page.contains("<form method=\"get\""));
        assert!(!page.contains("Hasil untuk"));
        assert!(!page.contains("Tidak ada hasil."));
        // the default direction stays selected
        assert!(page.contains("\"bugis-&gt;id\" selected"));
    }

    #[test]
    fn test_render_no_results_notice() {
        let page = render_page("Kamus", "zzz", Direction::BugisToIndonesian, &[]);

        assert!(page.contains("Hasil untuk &quot;zzz&quot;"));
        assert!(page.contains("Tidak ada hasil."));
    }

    #[test]
    fn test_render_results_follow_direction() {
        let results = [MatchResult {
            kind: MatchKind::Exact,
            bugis: "iye",
            indonesian: "ya",
        }];

        let forward = render_page("Kamus", "iye", Direction::BugisToIndonesian, &results);
        assert!(forward.contains("<strong>iye</strong> &ndash; ya"));
        assert!(forward.contains("badge exact\">EXACT"));

        let reverse = render_page("Kamus", "ya", Direction::IndonesianToBugis, &results);
        assert!(reverse.contains("<strong>ya</strong> &ndash; iye"));
        assert!(reverse.contains("\"id-&gt;bugis\" selected"));
    }

    #[test]
    fn test_render_escapes_query() {
        let page = render_page(
            "Kamus",
            "<script>alert(1)</script>",
            Direction::BugisToIndonesian,
            &[],
        );

        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
