use std::fmt::Debug;

/// Constraints for items that can be stored in the shared queue.
///
/// The queue rejects values that represent "no item at all". Most types
/// cannot express absence, so `is_absent` defaults to false and the check
/// never fires for them; `Option<T>` is the canonical type that can, and
/// reports `None` as absent.
pub trait Element: Debug + Send + 'static {
    /// Whether this value stands for an absent item
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: Debug + Send + 'static> Element for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! plain_element {
    ($($ty:ty),* $(,)?) => {
        $(impl Element for $ty {})*
    };
}

plain_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, bool, char, f32, f64, String);

impl Element for &'static str {}

impl<T: Debug + Send + 'static> Element for Vec<T> {}
