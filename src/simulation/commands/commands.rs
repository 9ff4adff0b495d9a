use crate::domain::geometry::{overlaps_opt, Vec2};
use crate::domain::sprite::SpriteId;
use crate::systems::capture::score_label;
use crate::systems::drag::DropOutcome;

use super::scene::{Scene, SceneTarget};
use super::GameCore;

pub(super) fn pointer_down<S: Scene>(core: &mut GameCore<S>, id: SpriteId, pointer: Vec2) -> bool {
    let Some(sprite) = core.sprites.get_mut(id.index()) else {
        return false;
    };
    if !core.drag.begin(sprite, pointer) {
        return false;
    }
    core.scene.set_dragging(id, true);
    core.scene.set_z_index(id, core.config.drag_z_index);
    true
}

pub(super) fn pointer_move<S: Scene>(core: &mut GameCore<S>, pointer: Vec2) -> bool {
    match core.drag.drag_to(&mut core.sprites, pointer) {
        Some(id) => {
            core.commit_transform(id);
            true
        }
        None => false,
    }
}

pub(super) fn pointer_up<S: Scene>(core: &mut GameCore<S>) -> Option<DropOutcome> {
    let scene = &core.scene;
    let target = scene.bounds(SceneTarget::CaptureZone);
    let outcome = core.drag.finish(&mut core.sprites, |sprite| {
        overlaps_opt(scene.bounds(SceneTarget::Sprite(sprite.id)), target)
    })?;

    match outcome {
        DropOutcome::OnTarget(id) => {
            console_log!("Drop on capture zone for sprite {}", id.0);
            capture(core, id);
        }
        DropOutcome::Released(id) => {
            console_log!("Drop outside capture zone for sprite {}", id.0);
            // Position stays where the pointer left it; kinematics resumes
            // from there with the pre-drag velocity.
            core.scene.set_dragging(id, false);
            core.scene.set_z_index(id, core.config.rest_z_index);
        }
    }
    Some(outcome)
}

pub(super) fn capture<S: Scene>(core: &mut GameCore<S>, id: SpriteId) -> bool {
    let Some(sprite) = core.sprites.get_mut(id.index()) else {
        return false;
    };
    let previous = core.score.score();
    let Some(score) = core.score.capture(sprite) else {
        console_log!("Sprite {} already captured, ignoring.", id.0);
        return false;
    };

    if core.drag.active_sprite() == Some(id) {
        core.drag.cancel();
    }

    core.scene.set_captured(id);
    core.scene.set_dragging(id, false);
    core.scene.set_z_index(id, core.config.captured_z_index);
    core.scene.set_score_text(&score_label(score));
    console_log!("Captured sprite {}: score {} -> {}", id.0, previous, score);
    true
}
