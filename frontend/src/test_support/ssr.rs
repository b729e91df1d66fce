use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Counts opening tags, so `<p` does not match `<path` or `</p>`.
pub fn count_tag(html: &str, tag: &str) -> usize {
    let open = format!("<{}", tag);
    html.match_indices(&open)
        .filter(|(idx, _)| {
            matches!(
                html[idx + open.len()..].chars().next(),
                Some(' ' | '>' | '/')
            )
        })
        .count()
}

/// Drops `data-hk` attributes and `<!--...-->` markers so renders from
/// separate runtimes compare equal.
pub fn strip_hydration_markers(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    loop {
        let comment = rest.find("<!--");
        let hk = rest.find(" data-hk=\"");
        let next = match (comment, hk) {
            (Some(c), Some(h)) => c.min(h),
            (Some(c), None) => c,
            (None, Some(h)) => h,
            (None, None) => break,
        };
        out.push_str(&rest[..next]);
        let tail = &rest[next..];
        let skip = if tail.starts_with("<!--") {
            tail.find("-->").map(|end| end + 3)
        } else {
            let value_start = " data-hk=\"".len();
            tail[value_start..].find('"').map(|end| value_start + end + 1)
        };
        match skip {
            Some(n) => rest = &tail[n..],
            None => {
                rest = tail;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tag_ignores_longer_names_and_closers() {
        let html = "<p>a</p><path d=\"\"/><p class=\"x\">b</p><pre>c</pre>";
        assert_eq!(count_tag(html, "p"), 2);
        assert_eq!(count_tag(html, "path"), 1);
    }

    #[test]
    fn strip_removes_markers() {
        let html = "<div data-hk=\"0-0-1\"><!--hk=0-0-2|leptos-home-start--><h1 data-hk=\"0-0-3\">x</h1></div>";
        assert_eq!(strip_hydration_markers(html), "<div><h1>x</h1></div>");
    }
}
