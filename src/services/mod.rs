pub mod backend_client;
pub mod chat_session;
pub mod extract;
pub mod mock_summary;
pub mod summary_lookup;
pub mod triage;
