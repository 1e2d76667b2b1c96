/// Trait for types that use one of their own values as `null`.
///
/// When a type implements this trait, the value `NULL` stands for "no value"
/// in memory, in JSON and in the database alike. There is no separate flag,
/// so the sentinel itself can never be stored as a present value.
pub trait Nullable: PartialEq + Sized {
    /// Value that represents `null` for the type.
    const NULL: Self;

    /// Indicates whether the value is `null` or not.
    #[inline(always)]
    fn is_null(&self) -> bool {
        self == &Self::NULL
    }

    /// Indicates whether the value holds something other than `null`.
    #[inline(always)]
    fn is_present(&self) -> bool {
        !self.is_null()
    }
}
