use bio::alphabets::Alphabet;
use lazy_static::lazy_static;

pub const DNA_BASES: &[u8] = b"ATGC";
pub const RNA_BASES: &[u8] = b"AUGC";

/// The 20 standard amino acids, by one-letter code, with their display names.
pub const AMINO_ACIDS: [(char, &str); 20] = [
    ('A', "Alanine"),
    ('C', "Cysteine"),
    ('D', "Aspartic acid"),
    ('E', "Glutamic acid"),
    ('F', "Phenylalanine"),
    ('G', "Glycine"),
    ('H', "Histidine"),
    ('I', "Isoleucine"),
    ('K', "Lysine"),
    ('L', "Leucine"),
    ('M', "Methionine"),
    ('N', "Asparagine"),
    ('P', "Proline"),
    ('Q', "Glutamine"),
    ('R', "Arginine"),
    ('S', "Serine"),
    ('T', "Threonine"),
    ('V', "Valine"),
    ('W', "Tryptophan"),
    ('Y', "Tyrosine"),
];

lazy_static! {
    pub static ref DNA: Alphabet = Alphabet::new(DNA_BASES);
    pub static ref RNA: Alphabet = Alphabet::new(RNA_BASES);
    pub static ref PROTEIN: Alphabet = {
        let codes: Vec<u8> = AMINO_ACIDS.iter().map(|&(code, _)| code as u8).collect();
        Alphabet::new(codes)
    };
}
