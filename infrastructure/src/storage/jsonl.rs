//! JSONL-backed repository.
//!
//! Every saved chat or feedback entry is appended to the file as one JSON
//! object with a `type` field (`"chat"` or `"feedback"`). Opening the
//! repository replays the file to rebuild the in-memory state.

use super::state::{RecordState, StoredRecord};
use async_trait::async_trait;
use helpdesk_application::{HelpdeskRepository, RepositoryError};
use helpdesk_domain::{
    ChatId, ChatRecord, FeedbackRecord, FeedbackStats, NewChat, NewFeedback, RecentFeedback,
};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

struct Inner {
    state: RecordState,
    file: File,
    /// Bytes of complete records in the file
    len: u64,
}

/// Append-only JSONL repository.
///
/// Thread-safe via `Mutex`; the state is only updated after the line has
/// been written and flushed.
pub struct JsonlRepository {
    inner: Mutex<Inner>,
    path: PathBuf,
}

impl JsonlRepository {
    /// Open (or create) the record file at `path`.
    ///
    /// Creates parent directories as needed. An unreadable last line is
    /// treated as an interrupted append: it is dropped with a warning and cut
    /// from the file. Invalid lines anywhere else fail with
    /// [`RepositoryError::Corrupt`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = if path.exists() {
            std::fs::read(path)?
        } else {
            Vec::new()
        };
        let (state, valid_len) = replay(&content)?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut len = content.len() as u64;
        if valid_len < len {
            warn!(
                "Dropping incomplete last record in {} ({} bytes)",
                path.display(),
                len - valid_len
            );
            file.set_len(valid_len)?;
            len = valid_len;
        }
        if len > 0 && content.get(len as usize - 1) != Some(&b'\n') {
            file.write_all(b"\n")?;
            len += 1;
        }

        info!(
            "Opened record store {} ({} chats, {} feedback entries)",
            path.display(),
            state.chat_count(),
            state.feedback_count()
        );

        Ok(Self {
            inner: Mutex::new(Inner { state, file, len }),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn inner(&self) -> Result<MutexGuard<'_, Inner>, RepositoryError> {
        self.inner.lock().map_err(|_| RepositoryError::Poisoned)
    }
}

/// Rebuild the state from file content. Also returns the length of the
/// content that holds valid records, which is shorter than `content` only
/// when the last line is unreadable.
fn replay(content: &[u8]) -> Result<(RecordState, u64), RepositoryError> {
    let mut state = RecordState::default();
    let lines: Vec<&[u8]> = content.split(|b| *b == b'\n').collect();
    let last_record = lines
        .iter()
        .rposition(|line| !line.trim_ascii().is_empty());

    let mut offset = 0u64;
    for (index, line) in lines.iter().enumerate() {
        let start = offset;
        offset += line.len() as u64 + 1;
        if line.trim_ascii().is_empty() {
            continue;
        }
        match serde_json::from_slice::<StoredRecord>(line) {
            Ok(record) => state.apply(record),
            Err(_) if Some(index) == last_record => return Ok((state, start)),
            Err(e) => {
                return Err(RepositoryError::Corrupt {
                    line: index + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((state, content.len() as u64))
}

impl Inner {
    fn append(&mut self, record: StoredRecord) -> Result<(), RepositoryError> {
        let mut line = serde_json::to_string(&record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        line.push('\n');

        if let Err(e) = self
            .file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
        {
            // cut any partial line so the next record starts cleanly
            if let Err(cut) = self.file.set_len(self.len) {
                warn!("Could not discard partial record: {}", cut);
            }
            return Err(e.into());
        }

        self.len += line.len() as u64;
        debug!("Appended {} byte record", line.len());
        self.state.apply(record);
        Ok(())
    }
}

#[async_trait]
impl HelpdeskRepository for JsonlRepository {
    async fn save_chat(&self, chat: NewChat) -> Result<ChatRecord, RepositoryError> {
        let mut inner = self.inner()?;
        let record = inner.state.next_chat(chat, chrono::Utc::now())?;
        inner.append(StoredRecord::Chat(record.clone()))?;
        Ok(record)
    }

    async fn find_chat(&self, id: ChatId) -> Result<Option<ChatRecord>, RepositoryError> {
        Ok(self.inner()?.state.find_chat(id).cloned())
    }

    async fn save_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, RepositoryError> {
        let mut inner = self.inner()?;
        let record = inner.state.next_feedback(feedback, chrono::Utc::now())?;
        inner.append(StoredRecord::Feedback(record.clone()))?;
        Ok(record)
    }

    async fn feedback_stats(&self, user: &str) -> Result<FeedbackStats, RepositoryError> {
        Ok(self.inner()?.state.stats(user))
    }

    async fn recent_feedback(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<RecentFeedback>, RepositoryError> {
        Ok(self.inner()?.state.recent(user, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::{AnswerResult, AnswerSource, SentimentLabel};

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("helpdesk.jsonl");

        {
            let repo = JsonlRepository::open(&path).unwrap();
            let chat = repo
                .save_chat(NewChat::new(
                    "alice",
                    "How do I vote?",
                    AnswerResult::external("Register with your state election office."),
                ))
                .await
                .unwrap();
            repo.save_feedback(NewFeedback {
                user: "alice".to_string(),
                chat_id: chat.id,
                feedback_text: "very helpful".to_string(),
                sentiment: SentimentLabel::Positive,
            })
            .await
            .unwrap();
        }

        let repo = JsonlRepository::open(&path).unwrap();
        let chat = repo.find_chat(ChatId(1)).await.unwrap().unwrap();
        assert_eq!(chat.question, "How do I vote?");
        assert_eq!(chat.source, AnswerSource::External);
        assert_eq!(repo.feedback_stats("alice").await.unwrap().positive, 1);

        // ids continue after the replayed records
        let next = repo
            .save_chat(NewChat::new("alice", "taxes?", AnswerResult::fallback("a")))
            .await
            .unwrap();
        assert_eq!(next.id, ChatId(2));
    }

    #[tokio::test]
    async fn test_writes_one_tagged_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        let repo = JsonlRepository::open(&path).unwrap();

        repo.save_chat(NewChat::new("bob", "passport", AnswerResult::fallback("a")))
            .await
            .unwrap();
        repo.save_feedback(NewFeedback {
            user: "bob".to_string(),
            chat_id: ChatId(1),
            feedback_text: "meh".to_string(),
            sentiment: SentimentLabel::Neutral,
        })
        .await
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "chat");
        assert_eq!(lines[0]["source"], "fallback");
        assert_eq!(lines[1]["type"], "feedback");
        assert_eq!(lines[1]["sentiment"], "neutral");
        assert_eq!(lines[1]["chat_id"], 1);
    }

    fn sample_chat() -> NewChat {
        NewChat::new("alice", "How do I vote?", AnswerResult::fallback("Register online."))
    }

    #[tokio::test]
    async fn test_corrupt_line_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        std::fs::write(&path, "\n{\"type\":\"chat\"}\n{\"type\":\"chat\"}\n").unwrap();

        match JsonlRepository::open(&path) {
            Err(RepositoryError::Corrupt { line, .. }) => assert_eq!(line, 2),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("corrupt file should not open"),
        }
    }

    #[tokio::test]
    async fn test_feedback_for_missing_chat_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        let repo = JsonlRepository::open(&path).unwrap();

        let result = repo
            .save_feedback(NewFeedback {
                user: "bob".to_string(),
                chat_id: ChatId(5),
                feedback_text: "great".to_string(),
                sentiment: SentimentLabel::Positive,
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::ChatNotFound(ChatId(5)))));
        assert!(std::fs::read_to_string(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_truncated_last_line_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        {
            let repo = JsonlRepository::open(&path).unwrap();
            repo.save_chat(sample_chat()).await.unwrap();
        }
        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(br#"{"type":"chat","id":2,"us"#).unwrap();
        drop(file);

        let repo = JsonlRepository::open(&path).unwrap();
        assert!(repo.find_chat(ChatId(1)).await.unwrap().is_some());
        assert!(repo.find_chat(ChatId(2)).await.unwrap().is_none());

        // the partial line is cut, so the next record reads back cleanly
        let next = repo.save_chat(sample_chat()).await.unwrap();
        assert_eq!(next.id, ChatId(2));
        drop(repo);

        let reopened = JsonlRepository::open(&path).unwrap();
        assert!(reopened.find_chat(ChatId(2)).await.unwrap().is_some());
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        {
            let repo = JsonlRepository::open(&path).unwrap();
            repo.save_chat(sample_chat()).await.unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, content.trim_end()).unwrap();

        let repo = JsonlRepository::open(&path).unwrap();
        repo.save_chat(sample_chat()).await.unwrap();
        drop(repo);

        let reopened = JsonlRepository::open(&path).unwrap();
        assert!(reopened.find_chat(ChatId(1)).await.unwrap().is_some());
        assert!(reopened.find_chat(ChatId(2)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_failed_append_leaves_no_residue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("helpdesk.jsonl");
        let repo = JsonlRepository::open(&path).unwrap();

        // a read-only handle makes every write fail
        repo.inner.lock().unwrap().file = File::open(&path).unwrap();
        assert!(repo.save_chat(sample_chat()).await.is_err());
        assert!(repo.find_chat(ChatId(1)).await.unwrap().is_none());

        repo.inner.lock().unwrap().file =
            OpenOptions::new().append(true).open(&path).unwrap();
        let chat = repo.save_chat(sample_chat()).await.unwrap();
        assert_eq!(chat.id, ChatId(1));
        drop(repo);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(JsonlRepository::open(&path).is_ok());
    }
}
