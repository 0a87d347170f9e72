use crate::domain::state::Frame;

/// Recompute every frame's cumulative score from scratch.
///
/// Scores are a left-to-right fold: once a frame's points cannot be
/// determined yet (a strike or spare still waiting on bonus rolls), that
/// frame and every frame after it are left unset. Recomputing the whole
/// sequence on every roll keeps bonus dependencies consistent without
/// tracking which earlier frames a new roll feeds into.
pub fn recalculate_scores(frames: &mut [Frame]) {
    let mut running: u16 = 0;
    let mut pending = false;
    for idx in 0..frames.len() {
        let points = if pending { None } else { frame_points(frames, idx) };
        match points {
            Some(p) => {
                running += p;
                frames[idx].score = Some(running);
            }
            None => {
                frames[idx].score = None;
                pending = true;
            }
        }
    }
}

/// Points for one frame, or `None` while bonus rolls are outstanding.
///
/// Bonus rolls are found by looking ahead in the frame sequence itself:
/// the rolls of subsequent frames, flattened in bowling order.
fn frame_points(frames: &[Frame], idx: usize) -> Option<u16> {
    let frame = &frames[idx];

    if frame.is_tenth() {
        let r1 = frame.roll1?;
        let r2 = frame.roll2?;
        if frame.is_strike() || frame.is_spare() {
            let r3 = frame.roll3?;
            return Some(u16::from(r1) + u16::from(r2) + u16::from(r3));
        }
        return Some(u16::from(r1) + u16::from(r2));
    }

    if frame.is_strike() {
        let mut bonus = rolls_after(frames, idx);
        let a = bonus.next()?;
        let b = bonus.next()?;
        return Some(10 + u16::from(a) + u16::from(b));
    }

    let r1 = frame.roll1?;
    let r2 = frame.roll2?;
    if frame.is_spare() {
        let a = rolls_after(frames, idx).next()?;
        return Some(10 + u16::from(a));
    }
    Some(u16::from(r1) + u16::from(r2))
}

fn rolls_after(frames: &[Frame], idx: usize) -> impl Iterator<Item = u8> + '_ {
    frames[idx + 1..].iter().flat_map(Frame::rolls)
}
