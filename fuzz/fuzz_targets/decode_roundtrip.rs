#![no_main]
use huffcode::{Error, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (text, bits) = data;
    let table = FrequencyTable::from_text(&text);
    let tree = match HuffmanTree::build(&table) {
        Ok(tree) => tree,
        Err(Error::EmptyFrequencyTable) => return,
        Err(e) => panic!("unexpected build error: {e}"),
    };

    let encoded = tree.encode(&text).unwrap();
    assert_eq!(tree.decode(&encoded).unwrap(), text);

    // arbitrary input must decode or fail cleanly
    if let Ok(decoded) = tree.decode(&bits) {
        let reencoded = tree.encode(&decoded).unwrap();
        if tree.root().is_leaf() {
            assert_eq!(reencoded.len(), bits.len());
        } else {
            assert_eq!(reencoded, bits);
        }
    }
});
