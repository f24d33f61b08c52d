#[cfg(test)]
pub mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{
        config::{SimConfig, Strategy, UNBOUNDED_GROWTH, UNBOUNDED_INITIAL_FRAMES},
        engine::{Access, Engine},
        error::ConfigError,
        record::Record,
    };

    fn engine(strategy: Strategy, frames: usize) -> Engine {
        let config = SimConfig::with_defaults(256, frames * 256, strategy)
            .unwrap()
            .seeded(1481322);
        Engine::new(config).unwrap()
    }

    fn reads(engine: &mut Engine, pages: &[u32]) -> Vec<Access> {
        pages
            .iter()
            .map(|&page| engine.access(Record::read(page)).unwrap())
            .collect()
    }

    #[test]
    fn lru_two_frames() {
        let mut engine = engine(Strategy::Lru, 2);
        let accesses = reads(&mut engine, &[1, 2, 3, 1]);

        assert!(accesses.iter().all(|a| a.is_fault()));
        assert_eq!(
            accesses[2],
            Access::Fault { frame: 0, evicted: Some(1), flushed: false }
        );
        // 2 is now the least recently used
        assert_eq!(
            accesses[3],
            Access::Fault { frame: 1, evicted: Some(2), flushed: false }
        );
        assert_eq!(engine.stats().faults, 4);
    }

    #[test]
    fn clock_two_frames() {
        let mut engine = engine(Strategy::Sec, 2);
        let accesses = reads(&mut engine, &[1, 2, 3]);

        assert_eq!(accesses[0], Access::Fault { frame: 0, evicted: None, flushed: false });
        assert_eq!(accesses[1], Access::Fault { frame: 1, evicted: None, flushed: false });

        // Both bits were set, the sweep clears them and lands back on frame 0
        assert_eq!(
            accesses[2],
            Access::Fault { frame: 0, evicted: Some(1), flushed: false }
        );
        assert!(!engine.frames().get(1).unwrap().referenced);
        assert!(engine.frames().get(0).unwrap().holds(3));
        assert_eq!(engine.stats().faults, 3);
    }

    #[test]
    fn clock_second_chance_saves_rereferenced_page() {
        let mut engine = engine(Strategy::Sec, 3);
        reads(&mut engine, &[1, 2, 3, 4]);

        // Page 2 is referenced again before the next fault
        assert_eq!(reads(&mut engine, &[2])[0], Access::Hit { frame: 1 });
        let access = reads(&mut engine, &[5])[0];

        assert_eq!(access, Access::Fault { frame: 2, evicted: Some(3), flushed: false });
        assert_eq!(engine.lookup(2), Some(1));
        assert_eq!(engine.lookup(4), Some(0));
    }

    #[test]
    fn unbounded_grows_once() {
        let mut engine = engine(Strategy::None, 1);
        assert_eq!(engine.capacity(), UNBOUNDED_INITIAL_FRAMES);

        for page in 0..25 {
            let access = engine.access(Record::write(page)).unwrap();
            assert_eq!(
                access,
                Access::Fault { frame: page as usize, evicted: None, flushed: false }
            );
        }

        let stats = engine.stats();
        assert_eq!(stats.faults, 25);
        assert_eq!(stats.flushes, 0);
        assert_eq!(stats.growths, 1);
        assert_eq!(engine.capacity(), UNBOUNDED_INITIAL_FRAMES + UNBOUNDED_GROWTH);

        // Everything stays resident
        for page in 0..25 {
            assert_eq!(engine.lookup(page), Some(page as usize));
        }
    }

    #[test]
    fn mrand_needs_more_frames_than_window() {
        for frames in 1..=3 {
            assert_eq!(
                SimConfig::with_defaults(256, frames * 256, Strategy::MRand).unwrap_err(),
                ConfigError::WindowCoversCapacity { capacity: frames, window: 3 }
            );
        }
        assert!(SimConfig::with_defaults(256, 4 * 256, Strategy::MRand).is_ok());
    }

    #[test]
    fn mrand_spares_recent_pages() {
        let mut engine = engine(Strategy::MRand, 4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut recent: Vec<u32> = Vec::new();

        for _ in 0..3000 {
            let page = rng.gen_range(0..12);
            recent.retain(|&p| p != page);
            recent.insert(0, page);
            recent.truncate(3);

            if let Access::Fault { evicted: Some(old), .. } = engine.access(Record::read(page)).unwrap() {
                assert!(!recent.contains(&old), "evicted recent page {}", old);
            }
        }

        assert!(engine.stats().faults > 0);
    }

    #[test]
    fn mrand_is_reproducible_with_seed() {
        let pages: Vec<u32> = (0..500).map(|i| (i * 7 + i / 3) % 17).collect();

        let mut first = engine(Strategy::MRand, 5);
        let mut second = engine(Strategy::MRand, 5);

        assert_eq!(reads(&mut first, &pages), reads(&mut second, &pages));
        assert_eq!(first.stats(), second.stats());
    }
}
