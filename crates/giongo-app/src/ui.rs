use std::fmt::Write as _;

use giongo_core::dictionary::Dictionary;
use giongo_core::language::ScriptConverter;
use giongo_core::matcher::MatchResult;
use giongo_core::types::DisplayEntry;
use kanal::AsyncReceiver;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const PROMPT_MESSAGE: &str = "Search for a sound effect!";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No results found";
pub const EXACT_HEADING: &str = "Exact matches";
pub const SIMILAR_HEADING: &str = "Similar matches";

/// Render a match result as plain text
pub fn render<C>(result: &MatchResult, dictionary: Option<&Dictionary>, converter: &C) -> String
where
    C: ScriptConverter + ?Sized,
{
    match (result, dictionary) {
        (MatchResult::NotSearched, _) => format!("{PROMPT_MESSAGE}\n"),
        (MatchResult::Empty, _) => format!("{EMPTY_MESSAGE}\n"),
        (MatchResult::Found { prefix, infix }, Some(dictionary)) => {
            let mut out = String::new();
            let groups = [(EXACT_HEADING, prefix), (SIMILAR_HEADING, infix)];
            for (heading, keys) in groups.into_iter().filter(|(_, keys)| !keys.is_empty()) {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(heading);
                out.push('\n');
                for entry in DisplayEntry::collect(keys, dictionary, converter) {
                    out.push('\n');
                    render_entry(&mut out, &entry);
                }
            }
            out
        }
        // Nothing to show matches against without a dictionary
        (MatchResult::Loading, _) | (MatchResult::Found { .. }, None) => {
            format!("{LOADING_MESSAGE}\n")
        }
    }
}

fn render_entry(out: &mut String, entry: &DisplayEntry) {
    let _ = writeln!(out, "{} · {}", entry.headword, entry.reading);
    for definition in &entry.definitions {
        match definition.detail() {
            Some(detail) => {
                let _ = writeln!(out, "  - {} — {}", definition.gloss, detail);
            }
            None => {
                let _ = writeln!(out, "  - {}", definition.gloss);
            }
        }
    }
}

/// Write every frame from the app to `out` until the channel closes
pub async fn ui_loop<W>(app_to_ui_rx: AsyncReceiver<String>, mut out: W) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Ok(frame) = app_to_ui_rx.recv().await {
        out.write_all(frame.as_bytes()).await?;
        out.flush().await?;
    }
    tracing::debug!("UI channel closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use giongo_core::dictionary::Definition;
    use giongo_lang_japanese::JapaneseProcessor;

    use super::*;

    fn dictionary() -> Dictionary {
        [
            ("ワン", vec![Definition::new("bark")]),
            (
                "ワンワン",
                vec![Definition::new("woof"), Definition::with_detail("bow-wow", "dog")],
            ),
            ("ガワン", vec![Definition::with_detail("clank", "")]),
        ]
        .into_iter()
        .collect()
    }

    fn found(prefix: &[&str], infix: &[&str]) -> MatchResult {
        MatchResult::Found {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            infix: infix.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn renders_status_messages() {
        let p = JapaneseProcessor::new();
        let d = dictionary();
        assert_eq!(render(&MatchResult::NotSearched, Some(&d), &p), "Search for a sound effect!\n");
        assert_eq!(render(&MatchResult::Loading, None, &p), "Loading...\n");
        assert_eq!(render(&MatchResult::Empty, Some(&d), &p), "No results found\n");
    }

    #[test]
    fn renders_both_groups_with_readings_and_details() {
        let p = JapaneseProcessor::new();
        let d = dictionary();
        let text = render(&found(&["ワン", "ワンワン"], &["ガワン"]), Some(&d), &p);

        assert_eq!(
            text,
            "Exact matches\n\
             \n\
             ワン · わん\n  - bark\n\
             \n\
             ワンワン · わんわん\n  - woof\n  - bow-wow — dog\n\
             \n\
             Similar matches\n\
             \n\
             ガワン · がわん\n  - clank\n"
        );
    }

    #[test]
    fn omits_empty_group_heading() {
        let p = JapaneseProcessor::new();
        let d = dictionary();
        let text = render(&found(&[], &["ガワン"]), Some(&d), &p);
        assert!(text.starts_with("Similar matches\n"));
        assert!(!text.contains("Exact matches"));
    }

    #[tokio::test]
    async fn ui_loop_writes_frames_in_order() {
        let (tx, rx) = kanal::unbounded_async::<String>();
        tx.send("one\n".to_string()).await.unwrap();
        tx.send("two\n".to_string()).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        ui_loop(rx, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\n");
    }
}
