pub(crate) const DEFAULT_HEAP_CAPACITY: usize = 1024;
