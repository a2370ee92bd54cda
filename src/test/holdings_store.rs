#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use crate::{
        app::{
            FixedDrift, HoldingsStore, RandomDrift, STORAGE_KEY, load_holdings,
            seed::initial_holdings,
        },
        models::{NewHolding, holding::gain_percentage},
        storage::{FileStore, KeyValueStore, MemoryStore},
    };

    fn bbri(lots: Decimal, price: Decimal) -> NewHolding {
        NewHolding::new(String::from("bbri"), String::new(), lots, price)
    }

    fn open_fixed(storage: MemoryStore, drift: Decimal) -> HoldingsStore<MemoryStore, FixedDrift> {
        HoldingsStore::open(storage, FixedDrift(drift)).unwrap()
    }

    #[test]
    fn opens_with_seed_when_nothing_saved() {
        let store = open_fixed(MemoryStore::new(), dec!(0));

        assert_eq!(store.holdings(), initial_holdings().as_slice());
        assert_eq!(*store.summary().total_value(), dec!(40260000));
        assert_eq!(store.storage().load(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn malformed_snapshot_falls_back_to_seed() {
        for saved in ["[{\"id\":", "not json", "", "null", "{\"ticker\":\"BBCA\"}"] {
            let storage = MemoryStore::with_entry(STORAGE_KEY, saved);
            assert_eq!(load_holdings(&storage).unwrap(), initial_holdings());
        }
    }

    #[test]
    fn saved_empty_list_is_respected() {
        let storage = MemoryStore::with_entry(STORAGE_KEY, "[]");
        let store = open_fixed(storage, dec!(0));

        assert!(store.holdings().is_empty());
        assert_eq!(*store.summary().gain_percent(), Decimal::ZERO);
    }

    #[test]
    fn reads_browser_style_snapshot() {
        let saved = r#"[{"id":"1","ticker":"BBCA","name":"Bank Central Asia","lots":12.4,"shares":1240,"purchasePrice":9100,"currentPrice":10250,"dailyGainPercentage":12.5}]"#;
        let storage = MemoryStore::with_entry(STORAGE_KEY, saved);

        let holdings = load_holdings(&storage).unwrap();

        assert_eq!(holdings, vec![initial_holdings()[0].clone()]);
    }

    #[test]
    fn add_builds_record_and_prepends() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.01));

        let added = store
            .add(bbri(dec!(10), dec!(5000)))
            .unwrap()
            .unwrap()
            .clone();

        assert_eq!(added.ticker(), "BBRI");
        assert_eq!(added.name(), "BBRI Corporation");
        assert_eq!(*added.shares(), dec!(1000));
        assert_eq!(*added.current_price(), dec!(5050));
        assert_eq!(*added.daily_gain_percentage(), dec!(1.00));
        assert_eq!(store.holdings().len(), 5);
        assert_eq!(store.holdings()[0], added);
        assert_eq!(store.holdings()[1..], initial_holdings()[..]);
    }

    #[test]
    fn add_keeps_given_name() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0));
        let input = NewHolding::new(
            String::from(" bbri "),
            String::from("Bank Rakyat Indonesia"),
            dec!(2.5),
            dec!(4800),
        );

        let added = store.add(input).unwrap().unwrap();

        assert_eq!(added.ticker(), "BBRI");
        assert_eq!(added.name(), "Bank Rakyat Indonesia");
        assert_eq!(*added.shares(), dec!(250));
        assert_eq!(*added.current_price(), dec!(4800));
        assert_eq!(*added.daily_gain_percentage(), Decimal::ZERO);
    }

    #[test]
    fn add_rounds_price_and_percentage() {
        let mut store = open_fixed(MemoryStore::new(), dec!(-0.0123));

        let added = store
            .add(NewHolding::new(String::from("goto"), String::new(), dec!(1), dec!(84)))
            .unwrap()
            .unwrap();

        // 84 * 0.9877 = 82.9668
        assert_eq!(*added.current_price(), dec!(83));
        assert_eq!(*added.daily_gain_percentage(), dec!(-1.19));
    }

    #[test]
    fn seeded_random_price_stays_within_two_percent() {
        let storage = MemoryStore::new();
        let simulator = RandomDrift::new(StdRng::seed_from_u64(7));
        let mut store = HoldingsStore::open(storage, simulator).unwrap();

        for _ in 0..50 {
            let added = store
                .add(bbri(dec!(10), dec!(5000)))
                .unwrap()
                .unwrap()
                .clone();
            let current = *added.current_price();

            assert!(current >= dec!(4900) && current <= dec!(5100), "{}", current);
            assert_eq!(current, current.trunc());
            assert_eq!(
                *added.daily_gain_percentage(),
                gain_percentage(dec!(5000), current)
            );
            assert_eq!(*added.shares(), *added.lots() * dec!(100));
        }
    }

    #[test]
    fn same_seed_same_prices() {
        let mut first = HoldingsStore::open(
            MemoryStore::new(),
            RandomDrift::new(StdRng::seed_from_u64(42)),
        )
        .unwrap();
        let mut second = HoldingsStore::open(
            MemoryStore::new(),
            RandomDrift::new(StdRng::seed_from_u64(42)),
        )
        .unwrap();

        for _ in 0..5 {
            let a = *first
                .add(bbri(dec!(1), dec!(9100)))
                .unwrap()
                .unwrap()
                .current_price();
            let b = *second
                .add(bbri(dec!(1), dec!(9100)))
                .unwrap()
                .unwrap()
                .current_price();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.01));
        let invalid = [
            NewHolding::new(String::new(), String::new(), dec!(10), dec!(5000)),
            NewHolding::new(String::from("   "), String::new(), dec!(10), dec!(5000)),
            bbri(dec!(0), dec!(5000)),
            bbri(dec!(-3), dec!(5000)),
            bbri(dec!(10), dec!(0)),
            bbri(dec!(10), dec!(-1)),
        ];

        for input in invalid {
            assert!(input.validate().is_err());
            assert!(store.add(input).unwrap().is_none());
        }

        assert_eq!(store.holdings(), initial_holdings().as_slice());
        assert_eq!(store.storage().load(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn oversized_input_is_ignored_without_panicking() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.02));

        assert!(store.add(bbri(dec!(1000000000000000), dec!(1000000000000000))).unwrap().is_none());
        assert!(store.add(bbri(dec!(1000000001), dec!(1))).unwrap().is_none());
        assert!(store.add(bbri(dec!(1), dec!(1000000001))).unwrap().is_none());

        assert_eq!(store.holdings(), initial_holdings().as_slice());
        assert_eq!(store.storage().load(STORAGE_KEY).unwrap(), None);
        assert_eq!(*store.summary().total_value(), dec!(40260000));
    }

    #[test]
    fn largest_accepted_holdings_still_aggregate() {
        let mut store = open_fixed(MemoryStore::with_entry(STORAGE_KEY, "[]"), dec!(0.02));

        for _ in 0..100 {
            store
                .add(bbri(dec!(1000000000), dec!(1000000000)))
                .unwrap()
                .unwrap();
        }

        let summary = store.summary();
        // 100 * 1e11 shares * 1.02e9
        assert_eq!(*summary.total_value(), dec!(10200000000000000000000));
        assert_eq!(*summary.total_cost(), dec!(10000000000000000000000));
        assert_eq!(*summary.gain_percent(), dec!(2));

        let reopened = open_fixed(store.storage().clone(), dec!(0));
        assert_eq!(reopened.summary(), summary);
    }

    #[test]
    fn out_of_range_snapshot_falls_back_to_seed() {
        let saved = r#"[{"id":"1","ticker":"BBRI","name":"BBRI Corporation","lots":1000000000000000,"shares":100000000000000000,"purchasePrice":1000000000000000,"currentPrice":1000000000000000,"dailyGainPercentage":0}]"#;
        let store = open_fixed(MemoryStore::with_entry(STORAGE_KEY, saved), dec!(0));

        assert_eq!(store.holdings(), initial_holdings().as_slice());
        assert_eq!(*store.summary().total_value(), dec!(40260000));
    }

    #[test]
    fn high_precision_values_survive_persistence() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.01));
        let lots = dec!(1.23456789012345678901);
        let price = dec!(5000.123456789012345);

        let added = store.add(bbri(lots, price)).unwrap().unwrap().clone();
        let reopened = open_fixed(store.storage().clone(), dec!(0));

        assert_eq!(reopened.holdings(), store.holdings());
        let first = &reopened.holdings()[0];
        assert_eq!(first, &added);
        assert_eq!(*first.lots(), lots);
        assert_eq!(*first.shares(), dec!(123.456789012345678901));
        assert_eq!(*first.purchase_price(), price);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0));
        let mut ids = Vec::new();

        for _ in 0..20 {
            let added = store.add(bbri(dec!(1), dec!(100))).unwrap().unwrap();
            ids.push(added.id().parse::<i64>().unwrap());
        }

        assert!(ids.windows(2).all(|pair| pair[1] > pair[0]));
        assert!(ids[0] > 4);
    }

    #[test]
    fn ids_stay_above_saved_ids() {
        let far_future = i64::MAX / 2;
        let saved = format!(
            r#"[{{"id":"{}","ticker":"BBCA","name":"Bank Central Asia","lots":1,"shares":100,"purchasePrice":9100,"currentPrice":9100,"dailyGainPercentage":0}}]"#,
            far_future
        );
        let mut store = open_fixed(MemoryStore::with_entry(STORAGE_KEY, &saved), dec!(0));

        let added = store.add(bbri(dec!(1), dec!(100))).unwrap().unwrap();

        assert_eq!(added.id().parse::<i64>().unwrap(), far_future + 1);
    }

    #[test]
    fn ids_step_past_the_largest_integer() {
        for (saved_id, expected) in [
            ("9223372036854775807", "9223372036854775808"),
            ("340282366920938463463374607431768211455", "340282366920938463463374607431768211456"),
            ("0099999999999999999999", "100000000000000000000"),
        ] {
            let saved = format!(
                r#"[{{"id":"{}","ticker":"BBCA","name":"Bank Central Asia","lots":1,"shares":100,"purchasePrice":9100,"currentPrice":9100,"dailyGainPercentage":0}}]"#,
                saved_id
            );
            let mut store = open_fixed(MemoryStore::with_entry(STORAGE_KEY, &saved), dec!(0));

            let first = store.add(bbri(dec!(1), dec!(100))).unwrap().unwrap().id().clone();
            let second = store.add(bbri(dec!(1), dec!(100))).unwrap().unwrap().id().clone();

            assert_eq!(first, expected);
            assert_ne!(first, second);
        }
    }

    #[test]
    fn persisted_list_loads_back_equal() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.0137));
        store.add(bbri(dec!(10), dec!(5000))).unwrap();
        store
            .add(NewHolding::new(String::from("unvr"), String::new(), dec!(0.5), dec!(2730)))
            .unwrap();

        let reopened = open_fixed(store.storage().clone(), dec!(0));

        assert_eq!(reopened.holdings(), store.holdings());
        assert_eq!(reopened.holdings().len(), 6);
        assert_eq!(reopened.holdings()[0].ticker(), "UNVR");
    }

    #[test]
    fn snapshot_uses_camel_case_numbers() {
        let mut store = open_fixed(MemoryStore::new(), dec!(0.01));
        store.add(bbri(dec!(10), dec!(5000))).unwrap();

        let saved = store.storage().load(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
        let first = &value[0];

        assert_eq!(first["ticker"], "BBRI");
        assert_eq!(first["shares"].as_f64(), Some(1000.0));
        assert_eq!(first["purchasePrice"].as_f64(), Some(5000.0));
        assert_eq!(first["currentPrice"].as_f64(), Some(5050.0));
        assert_eq!(first["dailyGainPercentage"].as_f64(), Some(1.0));
        assert!(first["id"].is_string());
    }

    #[test]
    fn file_backed_store_survives_restart() {
        let dir = tempdir().unwrap();

        let mut store = HoldingsStore::open(FileStore::new(dir.path()), FixedDrift(dec!(-0.02))).unwrap();
        store.add(bbri(dec!(4), dec!(5000))).unwrap();
        let expected = store.holdings().to_vec();

        let reopened = HoldingsStore::open(FileStore::new(dir.path()), FixedDrift(dec!(0))).unwrap();

        assert_eq!(reopened.holdings(), expected.as_slice());
        assert_eq!(*reopened.holdings()[0].current_price(), dec!(4900));
        assert_eq!(*reopened.holdings()[0].daily_gain_percentage(), dec!(-2));
    }
}
