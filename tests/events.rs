#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use parking_lot::{const_mutex, Mutex, MutexGuard};
    use punchlog::db::events::Events;
    use punchlog::libs::event::{Action, LogEvent, Stamp};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = const_mutex(());

    struct EventsTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for EventsTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            EventsTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(EventsTestContext)]
    #[test]
    fn test_append_and_fetch_in_insertion_order(_ctx: &mut EventsTestContext) {
        let events = Events::new().unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();

        events.append(late.into(), Action::Out.token(), "").unwrap();
        events.append(early.into(), Action::In.token(), "first").unwrap();

        let rows = events.fetch_all().unwrap();
        assert_eq!(rows, vec![LogEvent::new(late, "OUT", ""), LogEvent::new(early, "IN", "first")]);
    }

    #[test_context(EventsTestContext)]
    #[test]
    fn test_unreadable_timestamp_survives_storage(_ctx: &mut EventsTestContext) {
        let events = Events::new().unwrap();
        events.append(Stamp::Raw("not a date".to_string()), "IN", "").unwrap();

        let rows = events.fetch_all().unwrap();
        assert_eq!(rows[0].timestamp, Stamp::Raw("not a date".to_string()));
    }

    #[test_context(EventsTestContext)]
    #[test]
    fn test_replace_synced_swaps_whole_table(_ctx: &mut EventsTestContext) {
        let events = Events::new().unwrap();
        let at = |h: u32| Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap();

        let first = vec![LogEvent::new(at(8), "CLOCK_IN", ""), LogEvent::new(at(12), "CLOCK_OUT", "")];
        assert_eq!(events.replace_synced(&first).unwrap(), 2);

        let second = vec![LogEvent::new(at(13), "CLOCK_IN", "")];
        assert_eq!(events.replace_synced(&second).unwrap(), 1);

        assert_eq!(events.fetch_synced().unwrap(), second);
        assert!(events.fetch_all().unwrap().is_empty());
    }

    #[test_context(EventsTestContext)]
    #[test]
    fn test_rows_persist_across_connections(_ctx: &mut EventsTestContext) {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        Events::new().unwrap().append(at.into(), "IN", "").unwrap();

        let rows = Events::new().unwrap().fetch_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].instant(), Some(at));
    }
}
