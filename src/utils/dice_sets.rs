use once_cell::sync::Lazy;

/// Face sets of the 16 dice in the standard Boggle distribution.
///
/// One die carries the combined "QU" face, which occupies a single cell and
/// is matched as an atomic unit by the path search.
pub static CLASSIC_DICE: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    vec![
        vec!["A", "A", "E", "E", "G", "N"],
        vec!["E", "L", "R", "T", "T", "Y"],
        vec!["W", "A", "O", "O", "T", "T"],
        vec!["A", "B", "B", "J", "O", "O"],
        vec!["E", "H", "R", "T", "V", "W"],
        vec!["C", "I", "M", "O", "T", "U"],
        vec!["D", "I", "S", "T", "T", "Y"],
        vec!["E", "I", "O", "S", "S", "T"],
        vec!["Y", "D", "E", "L", "R", "V"],
        vec!["A", "C", "H", "O", "P", "S"],
        vec!["U", "H", "I", "M", "N", "QU"],
        vec!["E", "E", "I", "N", "S", "U"],
        vec!["E", "E", "G", "H", "N", "W"],
        vec!["A", "F", "F", "K", "P", "S"],
        vec!["H", "L", "N", "N", "R", "Z"],
        vec!["X", "D", "E", "I", "L", "R"],
    ]
});
