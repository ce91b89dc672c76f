#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmTransition {
    Raised,
    Cleared,
}

/// Edge-triggered threshold check over the sliding site-wide rate.
///
/// Entry requires strictly exceeding the threshold, exit only reaching it,
/// so a reading sitting exactly on the boundary can clear the alarm but
/// never raise it again in the same breath.
pub(super) fn transition(
    rate: f64,
    threshold: f64,
    alarm_active: &mut bool,
) -> Option<AlarmTransition> {
    if !*alarm_active && rate > threshold {
        *alarm_active = true;
        return Some(AlarmTransition::Raised);
    }

    if *alarm_active && rate <= threshold {
        *alarm_active = false;
        return Some(AlarmTransition::Cleared);
    }

    None
}
