use crate::app::QueryState;
use crate::domain::Event;
use crate::ports::ActivitySource;
use crate::services::activity_service::load_event;
use crate::tui::{ActivityList, EMPTY_MESSAGE, SearchForm};
use anyhow::Result;
use std::io::Write;

/// Submit `username` once and write the first page, or the banner, to `out`
///
/// Returns `Ok(false)` when the load failed and only the banner was written.
/// A username the form rejects is an error and nothing is written.
pub async fn print_report<W: Write>(
    source: &dyn ActivitySource,
    username: &str,
    page_size: usize,
    out: &mut W,
) -> Result<bool> {
    let mut form = SearchForm::new();
    let event = form
        .submit_with(username, |username| async move { load_event(source, username).await })
        .await?;

    let mut query = QueryState::new();
    query.apply(&Event::LoadStarted {
        username: username.to_string(),
    });
    query.apply(&event);

    if query.has_error() {
        writeln!(out, "{}", query.error)?;
        return Ok(false);
    }

    write!(out, "{}", render_plain(&query, &ActivityList::new(page_size)))?;
    Ok(true)
}

/// Plain-text timeline for `--print`, one block per visible event
pub fn render_plain(query: &QueryState, list: &ActivityList) -> String {
    let events = &query.events;
    if events.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = String::new();
    for event in list.visible_events(events) {
        out.push_str(&format!(
            "{} {}  [{}]\n    {}\n    {}\n",
            event.icon().glyph(),
            event.kind,
            event.formatted_date(),
            event.description(),
            event.repo.name,
        ));
    }

    if list.has_more(events.len()) {
        let remaining = events.len() - list.visible_len(events.len());
        out.push_str(&format!("... {} more\n", remaining));
    }

    out
}
