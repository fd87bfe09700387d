//! Verb dictionaries backing the embedded lexicon.
//!
//! Entries are exact word forms: lemmas plus irregular past tenses and
//! participles. Regular inflections (`saves`, `saved`) are absent, matching
//! an index lookup against a lexical database without morphology.
//!
//! # Coverage
//!
//! This is a curated index of a few hundred forms, far smaller than a full
//! lexical database such as WordNet, where almost any noun that can be used
//! as a verb is listed. Common noun/verb words from everyday goals (`water`,
//! `plant`, `time`) are included; rarer ones stay in normalized output and
//! can make near-paraphrases compare as less similar. Deployments that need
//! wider coverage add words through a lexicon file
//! ([`FileLexicon`](crate::lexicon::FileLexicon)).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Base forms of common English verbs.
pub static VERB_LEMMAS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Everyday activities
    set.extend([
        "ask", "bake", "bike", "breathe", "brush", "buy", "call", "clean", "climb", "cook",
        "cut", "dance", "drink", "drive", "eat", "exercise", "fish", "fly", "garden", "hike",
        "jog", "knit", "listen", "meditate", "paint", "play", "pray", "read", "relax", "rest",
        "ride", "run", "sew", "shop", "sing", "sit", "sleep", "smile", "stand", "stretch", "swim",
        "talk", "travel", "volunteer", "visit", "wake", "walk", "wash", "watch", "write",
    ]);

    // Change, effort, and habit
    set.extend([
        "achieve", "adopt", "avoid", "become", "begin", "break", "budget", "build", "change",
        "choose", "commit", "complete", "continue", "cut", "decide", "develop", "drop", "end",
        "finish", "focus", "follow", "form", "give", "grow", "improve", "increase", "keep",
        "kick", "learn", "limit", "lose", "maintain", "manage", "master", "move", "overcome",
        "pay", "plan", "practice", "practise", "prepare", "quit", "raise", "reach", "reduce",
        "save", "set", "spend", "start", "stay", "stick", "stop", "study", "succeed", "track",
        "train", "try", "turn", "use", "waste", "work",
    ]);

    // Social and communication
    set.extend([
        "apologize", "attend", "bring", "care", "connect", "contact", "date", "forgive", "help",
        "hire", "host", "hug", "invite", "join", "laugh", "leave", "lend", "love", "meet", "mentor",
        "reconnect", "say", "send", "share", "speak", "support", "teach", "tell", "text", "thank",
        "trust",
    ]);

    // General purpose
    set.extend([
        "add", "allow", "appear", "arrive", "be", "believe", "borrow", "bring", "carry", "catch",
        "clear", "come", "consider", "cover", "create", "deal", "do", "eliminate", "enjoy",
        "explore", "fall", "feel", "fight", "fill", "find", "fix", "forget", "get", "go", "hang",
        "have", "hear", "hold", "hope", "hurt", "include", "let", "lie", "like", "live", "look",
        "make", "mean", "mind", "miss", "need", "open", "organize", "own", "pass", "pick", "put",
        "remain", "remember", "remove", "repair", "replace", "return", "see", "seem", "sell",
        "serve", "show", "sort", "stand", "take", "think", "throw", "uninstall", "understand",
        "wait", "want", "wear", "win", "wish", "worry",
    ]);

    // Nouns that double as verbs
    set.extend([
        "bottle", "camp", "celebrate", "check", "cycle", "diet", "donate", "email", "exit",
        "fast", "floss", "invest", "nap", "network", "phone", "picnic", "plant", "recycle",
        "reflect", "review", "schedule", "ski", "skate", "snack", "surf", "time", "tidy",
        "update", "water",
    ]);

    set
});

/// Irregular past tenses and past participles.
pub static IRREGULAR_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Most common irregular participles
    set.extend([
        "been", "done", "gone", "seen", "known", "given", "taken", "made", "come", "become",
        "written", "spoken", "broken", "chosen", "driven", "eaten", "fallen", "forgotten",
        "forgiven", "frozen", "gotten", "hidden", "ridden", "risen", "shaken", "shown", "stolen",
        "sworn", "torn", "thrown", "worn", "beaten", "bitten", "blown", "drawn", "flown", "grown",
        "withdrawn", "begun", "drunk", "rung", "sung", "swum", "won", "hung", "struck", "stuck",
    ]);

    // Irregular simple past
    set.extend([
        "ate", "began", "bought", "brought", "built", "came", "caught", "chose", "did", "drank",
        "drove", "fed", "fell", "felt", "fought", "found", "flew", "forgot", "gave", "got",
        "grew", "had", "heard", "held", "kept", "knew", "learnt", "led", "left", "lent", "lost",
        "meant", "met", "paid", "ran", "rang", "rode", "said", "sang", "sat", "saw", "sent",
        "slept", "sold", "spent", "spoke", "stood", "swam", "taught", "thought", "threw", "told",
        "took", "understood", "was", "went", "were", "woke", "wore", "won", "wrote",
    ]);

    set
});

/// Check if a lowercased word is a known verb form.
pub fn is_verb_form(word: &str) -> bool {
    VERB_LEMMAS.contains(word) || IRREGULAR_FORMS.contains(word)
}
