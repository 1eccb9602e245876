/// Hook called once per sample of a limit scan.
///
/// `E` is the sample event a scan reports and `A` the control actions it
/// accepts. A scan keeps going while its observer answers `None`.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, which covers sample
/// counters and step tracers. Pass `()` when nothing should watch the scan.
///
/// ```
/// use cable_core::Observer;
///
/// // Stop once the output passes 10.
/// let mut seen = 0;
/// let mut stop_above_ten = |y: &f64| {
///     seen += 1;
///     (*y > 10.0).then_some("stop")
/// };
///
/// assert_eq!(stop_above_ten.observe(&4.0), None);
/// assert_eq!(stop_above_ten.observe(&12.5), Some("stop"));
/// assert_eq!(seen, 2);
/// ```
pub trait Observer<E, A> {
    /// Looks at one sample event and returns an action for the scan, if any.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Watches nothing and never intervenes.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
