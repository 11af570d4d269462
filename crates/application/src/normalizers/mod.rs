mod clients;
mod filtering;
mod history;
mod logs;
mod queries;
mod top_stats;
mod version;
mod whois;

pub use clients::{
    add_client_info, get_auto_client_info, get_client_info, get_params_for_clients_search,
    sort_clients,
};
pub use filtering::normalize_filtering_status;
pub use history::{normalize_history, HistoryResolution};
pub use logs::{normalize_log, normalize_logs};
pub use queries::is_valid_question_type;
pub use top_stats::normalize_top_stats;
pub use version::{compare_versions, is_version_greater};
pub use whois::normalize_whois;
