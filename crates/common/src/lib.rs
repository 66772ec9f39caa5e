//! Pieces shared by every crate in the workspace: log setup and small
//! response types that do not belong to any single entity.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn log_format_parses_json_case_insensitively() {
        assert_eq!(utils::logging::LogFormat::parse("JSON"), utils::logging::LogFormat::Json);
        assert_eq!(utils::logging::LogFormat::parse(" json "), utils::logging::LogFormat::Json);
        assert_eq!(utils::logging::LogFormat::parse("pretty"), utils::logging::LogFormat::Compact);
        assert_eq!(utils::logging::LogFormat::parse(""), utils::logging::LogFormat::Compact);
    }
}
