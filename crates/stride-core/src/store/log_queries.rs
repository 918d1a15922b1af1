//! Audit log and coaching event queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::error::{DatabaseResultExt, Result};
use crate::models::{CoachingEvent, CoachingEventKind, GenerationLogEntry, Provenance, StepKind};

const INSERT_LOG_SQL: &str = "INSERT INTO generation_log (client_id, kind, payload, model, tokens_used, used_knowledge_retrieval, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_LOG_SQL: &str = "SELECT id, client_id, kind, payload, model, tokens_used, used_knowledge_retrieval, created_at \
     FROM generation_log WHERE client_id = ?1 ORDER BY id";
const INSERT_EVENT_SQL: &str = "INSERT INTO coaching_events (client_id, event_type, title, related_id, created_at) \
     VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EVENTS_SQL: &str = "SELECT id, client_id, event_type, title, related_id, created_at \
     FROM coaching_events WHERE client_id = ?1 ORDER BY id";

fn parse_column<T, E>(index: usize, result: std::result::Result<T, E>) -> rusqlite::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl super::Database {
    /// Writes one generation-log entry and returns its ID.
    pub fn write_generation_log(
        &self,
        client_id: u64,
        kind: StepKind,
        payload: &serde_json::Value,
        provenance: &Provenance,
    ) -> Result<u64> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                INSERT_LOG_SQL,
                params![
                    client_id as i64,
                    kind.as_str(),
                    payload.to_string(),
                    provenance.model.as_deref(),
                    provenance.tokens_used as i64,
                    provenance.used_knowledge_retrieval,
                    now
                ],
            )
            .db_context("Failed to write generation log entry")?;
        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Lists generation-log entries for a client, oldest first.
    pub fn list_generation_log(&self, client_id: u64) -> Result<Vec<GenerationLogEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOG_SQL)
            .db_context("Failed to prepare generation log query")?;

        let entries = stmt
            .query_map(params![client_id as i64], |row| {
                let kind_str: String = row.get(2)?;
                let payload_str: String = row.get(3)?;
                let created_str: String = row.get(7)?;
                Ok(GenerationLogEntry {
                    id: row.get::<_, i64>(0)? as u64,
                    client_id: row.get::<_, i64>(1)? as u64,
                    kind: parse_column(
                        2,
                        kind_str
                            .parse::<StepKind>()
                            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
                    )?,
                    payload: parse_column(3, serde_json::from_str(&payload_str))?,
                    model: row.get(4)?,
                    tokens_used: row.get::<_, i64>(5)? as u64,
                    used_knowledge_retrieval: row.get(6)?,
                    created_at: parse_column(7, created_str.parse::<Timestamp>())?,
                })
            })
            .db_context("Failed to query generation log")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read generation log rows")?;

        Ok(entries)
    }

    /// Writes one coaching event and returns its ID.
    pub fn write_coaching_event(
        &self,
        client_id: u64,
        kind: CoachingEventKind,
        title: &str,
        related_id: Option<u64>,
    ) -> Result<u64> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                INSERT_EVENT_SQL,
                params![
                    client_id as i64,
                    kind.as_str(),
                    title,
                    related_id.map(|id| id as i64),
                    now
                ],
            )
            .db_context("Failed to write coaching event")?;
        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Lists coaching events for a client, oldest first.
    pub fn list_coaching_events(&self, client_id: u64) -> Result<Vec<CoachingEvent>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EVENTS_SQL)
            .db_context("Failed to prepare coaching event query")?;

        let events = stmt
            .query_map(params![client_id as i64], |row| {
                let kind_str: String = row.get(2)?;
                let created_str: String = row.get(5)?;
                Ok(CoachingEvent {
                    id: row.get::<_, i64>(0)? as u64,
                    client_id: row.get::<_, i64>(1)? as u64,
                    kind: parse_column(
                        2,
                        kind_str
                            .parse::<CoachingEventKind>()
                            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
                    )?,
                    title: row.get(3)?,
                    related_id: row.get::<_, Option<i64>>(4)?.map(|id| id as u64),
                    created_at: parse_column(5, created_str.parse::<Timestamp>())?,
                })
            })
            .db_context("Failed to query coaching events")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read coaching event rows")?;

        Ok(events)
    }
}
