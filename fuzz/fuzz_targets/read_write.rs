#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_tree::{BigEndian, ByteOrder, LittleEndian, from_slice, to_vec};

fn round_trip<O: ByteOrder>(data: &[u8]) {
    if let Ok((name, tag)) = from_slice::<O>(data) {
        let bytes = to_vec::<O>(&name, &tag).expect("decoded tree must encode");
        let (again_name, again) = from_slice::<O>(&bytes).expect("encoded tree must decode");
        assert_eq!(name, again_name);
        // Compare bytes, not trees: NaN floats never compare equal.
        assert_eq!(bytes, to_vec::<O>(&again_name, &again).expect("re-encode"));
    }
}

fuzz_target!(|data: &[u8]| {
    round_trip::<BigEndian>(data);
    round_trip::<LittleEndian>(data);
});
