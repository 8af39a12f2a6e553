use giongo_core::language::ScriptConverter;
use giongo_core::state::LookupSession;
use kanal::AsyncSender;

use crate::ui;

/// Evaluate the session's current query and send the rendered result to the UI
pub async fn handle_text_input<C>(
    session: &LookupSession,
    converter: &C,
    app_to_ui_tx: &AsyncSender<String>,
) -> anyhow::Result<()>
where
    C: ScriptConverter + ?Sized,
{
    let result = session.evaluate(converter);
    tracing::debug!(
        "Query '{}': {} matches",
        session.query(),
        result.match_count()
    );

    let frame = ui::render(&result, session.dictionary().map(|d| d.as_ref()), converter);
    app_to_ui_tx.send(frame).await?;

    Ok(())
}
