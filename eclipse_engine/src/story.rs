//! Bundled story: *Protocol Eclipse*.
//!
//! A short sci-fi survival piece used when no story file is configured. It is plain content
//! expressed as a [`WorldDef`], so it passes through the same validation as a loaded file.

use eclipse_data::{ChoiceDef, EffectDef, GameDef, SceneDef, WorldDef};

/// Key of the scene every adventure starts in.
pub const START_SCENE: &str = "intro";

/// Build the *Protocol Eclipse* story definition.
#[allow(clippy::too_many_lines)]
pub fn protocol_eclipse() -> WorldDef {
    WorldDef {
        game: GameDef {
            title: "Protocol Eclipse".into(),
            slug: "protocol-eclipse".into(),
            author: String::new(),
            version: "1".into(),
            intro: "A dying space station. Life support is failing and the escape pods are in Sector B.".into(),
            start_scene: START_SCENE.into(),
        },
        scenes: vec![
            SceneDef::new(
                "intro",
                "Cryo-Deck 7",
                "Hiss... The cryo-pod lid opens. You tumble onto the cold metal grating of Cryo-Deck 7. \
                 Emergency lights strobe red. The station's AI voice stutters: 'Life... support... failing.' \
                 To your left is a technician's locker. Ahead is the blast door leading to the Main Corridor.",
                vec![
                    ChoiceDef::new("search_locker", "Search the technician's locker.", "locker_loot"),
                    ChoiceDef::new("open_door", "Run to the blast door and try to open it.", "corridor_locked"),
                    ChoiceDef::new("check_console", "Check the nearby status console.", "status_check"),
                ],
            ),
            SceneDef::new(
                "locker_loot",
                "The Technician's Locker",
                "You force the locker open. Inside, you find a heavy 'Level 3 Access Card' and a rusted pipe. \
                 You take both. The air is getting thinner.",
                vec![
                    ChoiceDef::new("go_to_door", "Head to the blast door with your new items.", "corridor_access")
                        .with_effects(vec![
                            EffectDef::AddInventory("Access Card".into()),
                            EffectDef::AddJournal("Found Level 3 Access Card.".into()),
                        ]),
                ],
            ),
            SceneDef::new(
                "status_check",
                "Status Console",
                "The screen flickers. 'Oxygen reserves: 12%'. It also shows a map: The Escape Pods are in Sector B, \
                 but a Security Drone is patrolling the corridor.",
                vec![
                    ChoiceDef::new("search_locker", "Check the locker for supplies.", "locker_loot"),
                    ChoiceDef::new("open_door", "Rush to the blast door.", "corridor_locked"),
                ],
            ),
            SceneDef::new(
                "corridor_locked",
                "Access Denied",
                "The blast door is sealed. A red light blinks: 'LEVEL 3 CLEARANCE REQUIRED'. \
                 You cannot pass without an ID card.",
                vec![
                    ChoiceDef::new("back_to_locker", "Go back and search the locker.", "locker_loot"),
                    ChoiceDef::new(
                        "force_door",
                        "Try to pry the door open with your bare hands (Risky).",
                        "injury_death",
                    ),
                ],
            ),
            SceneDef::new(
                "corridor_access",
                "The Main Corridor",
                "You swipe the card. The door hisses open. The corridor is dark, filled with floating debris. \
                 At the far end, a rogue Security Drone scans the area with a blue laser. \
                 To your right is a Vent shaft. Straight ahead is the drone.",
                vec![
                    ChoiceDef::new("sneak_vent", "Crawl into the maintenance vent.", "vent_crawl"),
                    ChoiceDef::new("fight_drone", "Attack the drone with the rusted pipe.", "drone_combat"),
                    ChoiceDef::new(
                        "talk_drone",
                        "Try to override the drone using the Access Card.",
                        "drone_override",
                    ),
                ],
            ),
            SceneDef::new(
                "vent_crawl",
                "The Vents",
                "It's tight and claustrophobic. You crawl past whirring fans. You see light ahead: it's the Hangar Bay! \
                 You drop down, unseen.",
                vec![ChoiceDef::new("enter_pod", "Rush to the last Escape Pod.", "pod_launch")],
            ),
            SceneDef::new(
                "drone_combat",
                "Metal against Metal",
                "You swing the pipe! *CLANG*. The drone spins, its camera shattering. It sparks and falls deactivated. \
                 The path to the Hangar is clear, but you are out of breath.",
                vec![ChoiceDef::new("enter_pod", "Run to the Escape Pod.", "pod_launch")],
            ),
            SceneDef::new(
                "drone_override",
                "System Error",
                "You wave the card. The drone scans it... 'ACCESS GRANTED'. It lowers its weapons and escorts you \
                 to the Hangar Bay.",
                vec![ChoiceDef::new("enter_pod", "Board the Escape Pod.", "pod_launch")],
            ),
            SceneDef::new(
                "injury_death",
                "Critical Failure",
                "You pull at the heavy door. Something snaps in the mechanism, venting pressurized gas directly into \
                 your face. Your vision fades to black. The station claims another soul.",
                vec![ChoiceDef::new("restart", "Reboot simulation.", START_SCENE)],
            ),
            SceneDef::new(
                "pod_launch",
                "Escape",
                "You strap into the pod. With a violent jolt, you are launched into the void. \
                 Behind you, the station silently explodes into a fireball. You are safe. \
                 Hyperspace coordinates set for Earth.",
                vec![ChoiceDef::new("end_game", "End transmission.", START_SCENE)],
            ),
        ],
    }
}
