use core::fmt;

use super::list::LinkedList;

/// Renders the chain as `1 -> 2 -> 3 -> end`.
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("end")
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
