use huffman::{build_code, decode};

fn main() {
    // Skewed synthetic corpus: 'a' dominates, tail symbols are rare.
    let alphabet = ['a', 'a', 'a', 'a', 'b', 'b', 'c', 'd', 'e', ' '];
    let text: String = (0..10000usize)
        .map(|i| alphabet[(i * 7) % alphabet.len()])
        .collect();

    for _ in 0..1000 {
        let (tree, table) = build_code(&text).unwrap();
        let labels = table.encode(&text).unwrap();
        let decoded = decode(&tree, &labels).unwrap();
        assert_eq!(decoded.len(), text.len());
    }
}
