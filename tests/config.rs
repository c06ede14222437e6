#[cfg(test)]
mod tests {
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use punchlog::libs::config::Config;
    use punchlog::libs::zone::ReportZone;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = const_mutex(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.zone().unwrap(), ReportZone::Host);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_and_delete(_ctx: &mut ConfigTestContext) {
        let config = Config {
            timezone: Some("Europe/Berlin".to_string()),
            export_dir: Some(PathBuf::from("/tmp/exports")),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.zone().unwrap(), ReportZone::Named(chrono_tz::Europe::Berlin));

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
        Config::delete().unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_timezone_is_an_error(_ctx: &mut ConfigTestContext) {
        let config = Config {
            timezone: Some("Mars/Olympus_Mons".to_string()),
            export_dir: None,
        };
        assert!(config.zone().is_err());
    }

    #[test]
    fn test_export_path_resolution() {
        let config = Config {
            timezone: None,
            export_dir: Some(PathBuf::from("/srv/reports")),
        };
        assert_eq!(config.export_path("week.csv".into()), PathBuf::from("/srv/reports/week.csv"));
        assert_eq!(config.export_path("/abs/week.csv".into()), PathBuf::from("/abs/week.csv"));
        assert_eq!(Config::default().export_path("week.csv".into()), PathBuf::from("week.csv"));
    }
}
