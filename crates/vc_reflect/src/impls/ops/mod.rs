// Func
mod func;

// Chan<T>
mod chan;

// Dyn<I>
mod dyn_slot;
