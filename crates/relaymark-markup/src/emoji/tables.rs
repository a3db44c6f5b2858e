//! Emoji alias tables, one per source host.
//!
//! Pairs are `(host alias, chat alias)`. Narrowing entries are
//! `(host-only alias, nearest chat alias)`. Overrides are
//! `(chat alias, host alias)` and decide the widening direction for chat
//! aliases that several host aliases narrow to.

pub(super) static GITHUB_TWO_WAY: &[(&str, &str)] = &[
    ("thinking", "thinking_face"),
    ("hugs", "hugging_face"),
    ("robot", "robot_face"),
    ("roll_eyes", "face_with_rolling_eyes"),
    ("rofl", "rolling_on_the_floor_laughing"),
    ("star_struck", "star-struck"),
    ("man_technologist", "male-technologist"),
    ("woman_technologist", "female-technologist"),
    ("man_shrugging", "man-shrugging"),
    ("woman_shrugging", "woman-shrugging"),
    ("vulcan_salute", "spock-hand"),
    ("metal", "the_horns"),
    ("frowning_face", "white_frowning_face"),
    ("heavy_heart_exclamation", "heavy_heart_exclamation_mark_ornament"),
    ("tipping_hand_woman", "information_desk_person"),
    ("raising_hand_woman", "raising_hand"),
];

pub(super) static GITHUB_NARROWING: &[(&str, &str)] = &[
    ("facepalm", "face_palm"),
    ("man_facepalming", "face_palm"),
    ("woman_facepalming", "face_palm"),
    ("tipping_hand_man", "information_desk_person"),
];

pub(super) static GITHUB_OVERRIDES: &[(&str, &str)] = &[("face_palm", "facepalm")];

pub(super) static GITLAB_TWO_WAY: &[(&str, &str)] = &[
    ("slight_smile", "slightly_smiling_face"),
    ("hugging", "hugging_face"),
    ("rolling_eyes", "face_with_rolling_eyes"),
    ("thinking", "thinking_face"),
    ("robot", "robot_face"),
    ("rofl", "rolling_on_the_floor_laughing"),
    ("vulcan", "spock-hand"),
    ("metal", "the_horns"),
    ("thermometer_face", "face_with_thermometer"),
    ("head_bandage", "face_with_head_bandage"),
    ("nerd", "nerd_face"),
    ("upside_down", "upside_down_face"),
    ("money_mouth", "money_mouth_face"),
    ("zipper_mouth", "zipper_mouth_face"),
    ("frowning2", "white_frowning_face"),
    ("heart_exclamation", "heavy_heart_exclamation_mark_ornament"),
];

pub(super) static GITLAB_NARROWING: &[(&str, &str)] = &[
    ("thumbsup", "+1"),
    ("thumbsup_tone1", "+1"),
    ("thumbsup_tone2", "+1"),
    ("thumbsup_tone3", "+1"),
    ("thumbsup_tone4", "+1"),
    ("thumbsup_tone5", "+1"),
    ("thumbsdown", "-1"),
    ("thumbsdown_tone1", "-1"),
    ("thumbsdown_tone2", "-1"),
    ("thumbsdown_tone3", "-1"),
    ("thumbsdown_tone4", "-1"),
    ("thumbsdown_tone5", "-1"),
];

pub(super) static GITLAB_OVERRIDES: &[(&str, &str)] = &[("+1", "thumbsup"), ("-1", "thumbsdown")];
