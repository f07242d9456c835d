use std::collections::HashMap;
use std::fmt;

use crate::loader::LoadState;
use crate::types::{AthleteRecord, RowKey};

pub const LOADING_TEXT: &str = "Loading athletes...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Loading,
    Error(String),
    List(Vec<Row>),
}

pub fn render(state: &LoadState) -> View {
    match state {
        LoadState::Pending => View::Loading,
        LoadState::Failed { message } => View::Error(message.clone()),
        LoadState::Loaded { records } => View::List(rows(records)),
    }
}

fn rows(records: &[AthleteRecord]) -> Vec<Row> {
    let mut seen: HashMap<u64, usize> = HashMap::new();

    records
        .iter()
        .map(|athlete| {
            let key = match athlete.id {
                Some(id) => RowKey::Id(id),
                None => {
                    let hash = athlete.content_hash();
                    let occurrence = seen.entry(hash).or_insert(0);
                    let key = RowKey::Content {
                        hash,
                        occurrence: *occurrence,
                    };
                    *occurrence += 1;
                    key
                }
            };
            Row {
                key,
                text: format!(
                    "{} - Grade {} - PR: {}",
                    athlete.name, athlete.grade, athlete.personal_record
                ),
            }
        })
        .collect()
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => f.write_str(LOADING_TEXT),
            View::Error(message) => write!(f, "Error: {message}"),
            View::List(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    f.write_str(&row.text)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::loader::LoadState;
    use crate::render::{render, Row, View};
    use crate::types::{AthleteRecord, RowKey};

    fn athlete(id: Option<i32>, name: &str, grade: i32, pr: &str) -> AthleteRecord {
        AthleteRecord {
            id,
            name: name.into(),
            grade,
            personal_record: pr.into(),
            events: "".into(),
        }
    }

    #[test]
    fn test_render_pending() {
        let view = render(&LoadState::Pending);
        assert_eq!(view, View::Loading);
        assert_eq!(view.to_string(), "Loading athletes...");
    }

    #[test]
    fn test_render_failed() {
        let view = render(&LoadState::Failed {
            message: "Failed to fetch athletes".into(),
        });
        assert_eq!(view.to_string(), "Error: Failed to fetch athletes");
    }

    #[test]
    fn test_render_loaded_in_server_order() {
        let state = LoadState::Loaded {
            records: vec![
                athlete(Some(7), "Zed Last", 12, "4:59"),
                athlete(Some(1), "Jane Doe", 10, "5:12"),
            ],
        };

        assert_eq!(
            render(&state),
            View::List(vec![
                Row {
                    key: RowKey::Id(7),
                    text: "Zed Last - Grade 12 - PR: 4:59".into(),
                },
                Row {
                    key: RowKey::Id(1),
                    text: "Jane Doe - Grade 10 - PR: 5:12".into(),
                },
            ])
        );
        assert_eq!(
            render(&state).to_string(),
            "Zed Last - Grade 12 - PR: 4:59\nJane Doe - Grade 10 - PR: 5:12"
        );
    }

    #[test]
    fn test_render_empty_list() {
        let view = render(&LoadState::Loaded { records: vec![] });
        assert_eq!(view, View::List(vec![]));
        assert_eq!(view.to_string(), "");
    }

    #[test]
    fn test_missing_ids_get_distinct_keys() {
        let twin = athlete(None, "Sam Poe", 9, "6:40");
        let records = vec![twin.clone(), athlete(None, "Ann Loe", 9, "6:02"), twin.clone()];

        let View::List(rows) = render(&LoadState::Loaded { records }) else {
            panic!("expected a list");
        };
        let keys: Vec<RowKey> = rows.iter().map(|r| r.key).collect();

        assert_eq!(
            keys[0],
            RowKey::Content {
                hash: twin.content_hash(),
                occurrence: 0
            }
        );
        assert_eq!(
            keys[2],
            RowKey::Content {
                hash: twin.content_hash(),
                occurrence: 1
            }
        );
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
    }

    #[test]
    fn test_keys_survive_reordering() {
        let jane = athlete(None, "Jane Doe", 10, "5:12");
        let sam = athlete(None, "Sam Poe", 9, "6:40");

        let key_of = |records: Vec<AthleteRecord>, name: &str| {
            let View::List(rows) = render(&LoadState::Loaded { records }) else {
                panic!("expected a list");
            };
            rows.into_iter()
                .find(|r| r.text.starts_with(name))
                .map(|r| r.key)
                .unwrap()
        };

        assert_eq!(
            key_of(vec![jane.clone(), sam.clone()], "Jane"),
            key_of(vec![sam, jane], "Jane")
        );
    }
}
