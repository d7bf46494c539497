
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum VariantError {
    #[error("allele{index} is empty (length = 0)")]
    EmptyAllele { index: usize },
    #[error("allele{index} must be length 1")]
    AlleleLen1 { index: usize }
}

/// A variant definition structure shared by the call set and the truth sets.
/// It assumes that chromosome is fixed by the single-sample haploid convention, so only the position is tracked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variant {
    /// The coordinate of the event, 0-based
    position: u64,
    /// The reference allele sequence
    ref_allele: Vec<u8>,
    /// The alternate allele sequence
    alt_allele: Vec<u8>,

    // auxiliary booleans
    /// if true, the caller's own quality filter rejected this call; always false for truth variants
    is_filtered: bool
}

impl Variant {
    /// Creates a new truth-set variant, which must be a single-nucleotide variant and is never filtered.
    /// # Arguments
    /// * `position` - the 0-based coordinate of the variant
    /// * `ref_allele` - the reference base
    /// * `alt_allele` - the query base
    /// # Errors
    /// * if either allele is not exactly 1 bp long
    pub fn new_truth_snv(position: u64, ref_allele: Vec<u8>, alt_allele: Vec<u8>) -> Result<Variant, VariantError> {
        // truth rows are pre-filtered to the SNV type tag, so the alleles must be single bases
        if ref_allele.len() != 1 {
            return Err(VariantError::AlleleLen1 { index: 0 });
        }
        if alt_allele.len() != 1 {
            return Err(VariantError::AlleleLen1 { index: 1 });
        }

        Ok(Variant {
            position,
            ref_allele,
            alt_allele,
            is_filtered: false
        })
    }

    /// Creates a new call-set variant, which may be any shape (SNV, indel, or SV record).
    /// # Arguments
    /// * `position` - the 0-based coordinate of the variant
    /// * `ref_allele` - the reference allele (REF)
    /// * `alt_allele` - a single alternate allele (one entry of ALT)
    /// * `is_filtered` - true if the record did not pass the caller's quality filter
    /// # Errors
    /// * if either allele is empty
    pub fn new_call(position: u64, ref_allele: Vec<u8>, alt_allele: Vec<u8>, is_filtered: bool) -> Result<Variant, VariantError> {
        if ref_allele.is_empty() {
            return Err(VariantError::EmptyAllele { index: 0 });
        }
        if alt_allele.is_empty() {
            return Err(VariantError::EmptyAllele { index: 1 });
        }

        Ok(Variant {
            position,
            ref_allele,
            alt_allele,
            is_filtered
        })
    }

    /// True if this variant represents an SNV, i.e. both alleles are exactly one base.
    pub fn is_snv(&self) -> bool {
        self.ref_allele.len() == 1 && self.alt_allele.len() == 1
    }

    /// True if `other` describes the same event: position and both alleles match exactly.
    /// This comparison ignores the filter flag and is agnostic to the variant shape.
    /// # Arguments
    /// * `other` - the variant to compare against
    pub fn same_variant(&self, other: &Variant) -> bool {
        self.position == other.position &&
            self.ref_allele == other.ref_allele &&
            self.alt_allele == other.alt_allele
    }

    /// The 0-based inclusive coordinate of the last reference base this record covers.
    /// For an SNV this equals `position`; for deletions it extends across the removed sequence.
    pub fn ref_end(&self) -> u64 {
        // ref_allele is non-empty by construction, so this cannot underflow
        self.position + self.ref_allele.len() as u64 - 1
    }

    // getters
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn ref_allele(&self) -> &[u8] {
        &self.ref_allele
    }

    pub fn alt_allele(&self) -> &[u8] {
        &self.alt_allele
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }
}
