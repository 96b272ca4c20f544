#![no_main]

use std::collections::BTreeMap;

use libfuzzer_sys::fuzz_target;
use topkeep::retention::RetentionCore;

// Fuzz arbitrary insert sequences against RetentionCore
//
// Properties checked after every insert:
// - len never exceeds capacity
// - cached minimum and ordering invariants hold
// - contents equal the largest `capacity` first-seen keys
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 32);
    let mut core: RetentionCore<u8, u8> = RetentionCore::new(capacity);
    let mut first_seen: BTreeMap<u8, u8> = BTreeMap::new();

    for chunk in data[1..].chunks(2) {
        if chunk.len() < 2 {
            break;
        }
        let (key, value) = (chunk[0], chunk[1]);
        let admitted = core.try_insert(key, value);
        first_seen.entry(key).or_insert(value);

        assert!(core.len() <= capacity);
        assert!(core.check_invariants().is_ok());
        if capacity == 0 {
            assert!(admitted);
            assert!(core.is_empty());
        }
    }

    if capacity > 0 {
        let skip = first_seen.len().saturating_sub(capacity);
        let expected: Vec<(u8, u8)> = first_seen.into_iter().skip(skip).collect();
        let actual: Vec<(u8, u8)> = core.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(actual, expected);
    }
});
