use crate::seq::alphabet::AMINO_ACIDS;

/// Looks up the full name of a one-letter amino acid code, ignoring case.
pub fn name_of(code: char) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    AMINO_ACIDS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| AMINO_ACIDS[i].1)
}

/// Names every residue of a protein sequence, in input order.
///
/// Characters that are not one of the 20 standard codes are skipped without
/// error, so callers should classify the sequence as protein beforehand if a
/// complete listing matters. Repeated residues each get their own entry.
pub fn name_amino_acids(sequence: &str) -> Vec<(char, &'static str)> {
    sequence
        .chars()
        .filter_map(|c| name_of(c).map(|name| (c.to_ascii_uppercase(), name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{name_amino_acids, name_of};

    #[test]
    fn all_twenty_in_order() {
        let names = name_amino_acids("ACDEFGHIKLMNPQRSTVWY");
        assert_eq!(names.len(), 20);
        assert_eq!(names[0], ('A', "Alanine"));
        assert_eq!(names[1], ('C', "Cysteine"));
        assert_eq!(names[10], ('M', "Methionine"));
        assert_eq!(names[19], ('Y', "Tyrosine"));

        let codes: String = names.iter().map(|&(c, _)| c).collect();
        assert_eq!(codes, "ACDEFGHIKLMNPQRSTVWY");
    }

    #[test]
    fn unknown_codes_are_dropped() {
        let names = name_amino_acids("ACDX");
        assert_eq!(
            names,
            vec![('A', "Alanine"), ('C', "Cysteine"), ('D', "Aspartic acid")]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let names = name_amino_acids("GGa");
        assert_eq!(
            names,
            vec![('G', "Glycine"), ('G', "Glycine"), ('A', "Alanine")]
        );
    }

    #[test]
    fn non_protein_input_gives_partial_or_empty() {
        assert!(name_amino_acids("").is_empty());
        assert!(name_amino_acids("BJOUXZ*1 ").is_empty());
        assert_eq!(name_amino_acids("AUGC").len(), 3);
    }

    #[test]
    fn lowercase_codes_come_back_uppercase() {
        assert_eq!(
            name_amino_acids("mwx"),
            vec![('M', "Methionine"), ('W', "Tryptophan")]
        );
    }

    #[test]
    fn single_lookup() {
        assert_eq!(name_of('w'), Some("Tryptophan"));
        assert_eq!(name_of('B'), None);
        assert_eq!(name_of('é'), None);
    }
}
