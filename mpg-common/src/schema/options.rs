//! Builtin music option matrix

use super::{Category, Genre, OptionEntry, SectionId};

use Genre::*;

/// Candidate phrases per category and genre
pub static OPTION_TABLE: &[OptionEntry] = &[
    OptionEntry {
        section: SectionId::Core,
        category: Category::GenreStyle,
        lists: &[
            (Some(Chillhop), &["Chillhop", "Jazzy Chillhop", "Ambient Chillhop"]),
            (Some(Lofi), &["Lo-Fi Hip-Hop", "Dusty Lo-Fi", "Bedroom Lo-Fi"]),
            (Some(Neosoul), &["Neo-Soul", "Alternative Soul", "Contemporary Soul"]),
            (Some(Rnb), &["Contemporary R&B", "Classic R&B", "Alt R&B"]),
            (Some(Hiphop), &["Boom Bap", "Trap", "Conscious Hip-Hop"]),
            (Some(Gospel), &["Traditional Gospel", "Contemporary Gospel", "Neo Gospel"]),
            (Some(Edm), &["House", "Progressive House", "Deep House"]),
            (Some(Trap), &["Classic Trap", "Melodic Trap", "Hardwave"]),
            (Some(Orchestra), &["Symphonic", "Chamber Orchestra", "Modern Classical"]),
            (Some(Dubstep), &["Melodic Dubstep", "Heavy Dubstep", "Future Bass"]),
            (Some(Reggae), &["Roots Reggae", "Dancehall", "Reggae Fusion"]),
            (Some(Electronica), &["Ambient Electronic", "Downtempo", "IDM"]),
        ],
    },
    OptionEntry {
        section: SectionId::Core,
        category: Category::BpmTempo,
        lists: &[
            (Some(Chillhop), &["70-80 BPM", "80-90 BPM", "90-100 BPM"]),
            (Some(Lofi), &["60-70 BPM", "70-80 BPM", "80-90 BPM"]),
            (Some(Neosoul), &["85-95 BPM", "95-105 BPM", "105-115 BPM"]),
            (Some(Rnb), &["90-100 BPM", "100-110 BPM", "110-120 BPM"]),
            (Some(Hiphop), &["85-95 BPM", "130-140 BPM (Trap)", "90-100 BPM"]),
            (Some(Gospel), &["100-110 BPM", "110-120 BPM", "120-130 BPM"]),
            (Some(Edm), &["120-128 BPM", "128-132 BPM", "132-140 BPM"]),
            (Some(Trap), &["130-140 BPM", "140-150 BPM", "150-160 BPM"]),
            (Some(Orchestra), &["60-80 BPM", "80-100 BPM", "100-120 BPM"]),
            (Some(Dubstep), &["140 BPM", "150 BPM", "160 BPM"]),
            (Some(Reggae), &["60-90 BPM", "90-110 BPM", "110-130 BPM"]),
            (Some(Electronica), &["80-120 BPM", "120-140 BPM", "140-160 BPM"]),
        ],
    },
    OptionEntry {
        section: SectionId::Core,
        category: Category::KeyScale,
        lists: &[
            (Some(Chillhop), &["C Major", "A Minor", "F Major"]),
            (Some(Lofi), &["D Minor", "F Major", "Bb Major"]),
            (Some(Neosoul), &["E Minor", "A Major", "D Major"]),
            (Some(Rnb), &["Bb Major", "G Minor", "Eb Major"]),
            (Some(Hiphop), &["C Minor", "E Minor", "F# Minor"]),
            (Some(Gospel), &["Ab Major", "Db Major", "F Major"]),
            (Some(Edm), &["A Minor", "C Major", "G Minor"]),
            (Some(Trap), &["C# Minor", "F Minor", "G# Minor"]),
            (Some(Orchestra), &["D Major", "B Minor", "F# Major"]),
            (Some(Dubstep), &["E Minor", "A Minor", "D Minor"]),
            (Some(Reggae), &["A Major", "D Major", "G Major"]),
            (Some(Electronica), &["C Minor", "F Minor", "Bb Minor"]),
        ],
    },
    OptionEntry {
        section: SectionId::Core,
        category: Category::TimeSignature,
        lists: &[
            (Some(Chillhop), &["4/4", "6/8", "7/8"]),
            (Some(Lofi), &["4/4", "Swing 4/4", "Half-Time"]),
            (Some(Neosoul), &["4/4", "Neo-Soul Swing", "6/8"]),
            (Some(Rnb), &["4/4", "R&B Swing", "Half-Time Shuffle"]),
            (Some(Hiphop), &["4/4", "Trap Timing", "Boom Bap Swing"]),
            (Some(Gospel), &["4/4", "Gospel Shuffle", "12/8"]),
            (Some(Edm), &["4/4", "Straight 4/4", "Dance Timing"]),
            (Some(Trap), &["4/4", "Half-Time", "Double-Time"]),
            (Some(Orchestra), &["4/4", "3/4", "6/8"]),
            (Some(Dubstep), &["4/4", "Half-Time", "Double-Time"]),
            (Some(Reggae), &["4/4", "One Drop", "Steppers"]),
            (Some(Electronica), &["4/4", "7/8", "5/4"]),
        ],
    },
    OptionEntry {
        section: SectionId::Rhythm,
        category: Category::DrumKitStyle,
        lists: &[
            (Some(Chillhop), &["Vintage Acoustic", "Lo-Fi Electronic", "Jazz Brushes"]),
            (Some(Lofi), &["Dusty Vinyl", "Analog Drum Machine", "Tape Saturated"]),
            (Some(Neosoul), &["Live Acoustic", "Hybrid Electronic", "Vintage Ludwig"]),
            (Some(Rnb), &["Tight & Punchy", "808 Hybrid", "Live Drums"]),
            (Some(Hiphop), &["Punchy Sampled", "808 Heavy", "Vintage Breaks"]),
            (Some(Gospel), &["Live Acoustic", "Punchy Modern", "Vintage Gospel"]),
            (Some(Edm), &["Electronic Punchy", "Layered Samples", "Analog Drums"]),
            (Some(Trap), &["Heavy 808 Kit", "Hybrid Trap Kit", "Minimal Trap Kit"]),
            (Some(Orchestra), &["Timpani & Percussion", "Concert Percussion", "Orchestral Drums"]),
            (Some(Dubstep), &["Electronic Heavy", "Hybrid Kit", "Glitch Drums"]),
            (Some(Reggae), &["One Drop Kit", "Steppers Kit", "Digital Reggae"]),
            (Some(Electronica), &["Programmed", "Glitch Beats", "Ambient Percussion"]),
        ],
    },
    OptionEntry {
        section: SectionId::Rhythm,
        category: Category::KickPattern,
        lists: &[
            (Some(Chillhop), &["Laid-back Swing", "Subtle Sidestick", "Minimal Thump"]),
            (Some(Lofi), &["Muffled Thump", "Vintage 808", "Cardboard Kick"]),
            (Some(Neosoul), &["Neo-Soul Groove", "Syncopated Kick", "Ghost Kick"]),
            (Some(Rnb), &["Punchy 808", "Sub Heavy", "Syncopated Pattern"]),
            (Some(Hiphop), &["Booming 808", "Punchy Kick", "Sub Heavy Kick"]),
            (Some(Gospel), &["Gospel Chops", "Four on Floor", "Syncopated Gospel"]),
            (Some(Edm), &["Four on Floor", "Deep House Kick", "Punchy Dance"]),
            (Some(Trap), &["Punchy 808", "Distorted Kick", "Sub Kick"]),
            (Some(Orchestra), &["Timpani Rolls", "Orchestral Hits", "Subtle Timpani"]),
            (Some(Dubstep), &["Heavy Drop Kick", "Distorted 808", "Sub Bass Kick"]),
            (Some(Reggae), &["One Drop", "Steppers", "Rockers"]),
            (Some(Electronica), &["Minimal Kick", "Glitch Pattern", "Ambient Pulse"]),
        ],
    },
    OptionEntry {
        section: SectionId::Rhythm,
        category: Category::SnareClapStyle,
        lists: &[
            (Some(Chillhop), &["Soft Rimshot", "Snappy Snare", "Brush Snare"]),
            (Some(Lofi), &["Dusty Snare", "Vinyl Clap", "Taped Rim"]),
            (Some(Neosoul), &["Tight Pop", "Ghosted Snare", "Brush Accents"]),
            (Some(Rnb), &["Snappy Clap", "Tight Snare", "Layered Clap"]),
            (Some(Hiphop), &["Cracked Snare", "Snare+Clap Stack", "Gritty Rim"]),
            (Some(Gospel), &["Live Crack", "Gospel Rimshot", "Snare Rolls"]),
            (Some(Edm), &["Bright Clap", "Layered Snare", "Synthetic Clap"]),
            (Some(Trap), &["Snare+Clap", "Snare Roll", "Rim Tap"]),
            (Some(Orchestra), &["Snare Drum", "Side Stick", "Military Roll"]),
            (Some(Dubstep), &["Aggressive Snare", "Metallic Clap", "Layered Crack"]),
            (Some(Reggae), &["Loose Snare", "Clap Off-beat", "Side Stick"]),
            (Some(Electronica), &["Synthetic Snare", "Glitch Clap", "Click Snare"]),
        ],
    },
    OptionEntry {
        section: SectionId::Rhythm,
        category: Category::HiHatPattern,
        lists: &[
            (Some(Chillhop), &["Swing 8ths", "Loose 16ths", "Sparse Hats"]),
            (Some(Lofi), &["Dusty 8ths", "Lazy 16ths", "Open Hat Accents"]),
            (Some(Neosoul), &["Swung 16ths", "Ghosted 32nds", "Offbeat Hats"]),
            (Some(Rnb), &["Tight 16ths", "Syncopated 8ths", "Open Hat on 4"]),
            (Some(Hiphop), &["Trap 1/16 Rolls", "Straight 8ths", "Triplet Rolls"]),
            (Some(Gospel), &["Live 8ths", "Open on 4", "Syncopated 16ths"]),
            (Some(Edm), &["Straight 16ths", "Offbeat Open Hat", "Shaker 16ths"]),
            (Some(Trap), &["1/32 Rolls", "Triplet Rolls", "Open Hat Stabs"]),
            (Some(Orchestra), &["Cymbal Swells", "Closed Hat Ticks", "Ride Patterns"]),
            (Some(Dubstep), &["Stuttered 16ths", "Triplet Stabs", "Offbeat Open"]),
            (Some(Reggae), &["Offbeat Open Hat", "Sparse 8ths", "Shaker Groove"]),
            (Some(Electronica), &["Glitchy 16ths", "Randomized Hats", "Granular Hats"]),
        ],
    },
    OptionEntry {
        section: SectionId::Bass,
        category: Category::BassType,
        lists: &[
            (Some(Chillhop), &["Warm Synth", "Upright Bass", "Electric Bass"]),
            (Some(Lofi), &["Warm 808", "Muffled Synth Bass", "Analog Sub"]),
            (Some(Neosoul), &["Fender Bass", "Synth Bass", "Upright Bass"]),
            (Some(Rnb), &["Sub Bass", "Analog Synth", "Electric Bass"]),
            (Some(Hiphop), &["Deep 808", "Synth Bass", "Sampled Bass"]),
            (Some(Gospel), &["Electric Bass", "Synth Bass", "Upright Bass"]),
            (Some(Edm), &["Deep Sub", "Synth Bass", "Reese Bass"]),
            (Some(Trap), &["Sliding 808", "Reese Bass", "Sub-Bass"]),
            (Some(Orchestra), &["Double Bass", "Cello Section", "Contrabass"]),
            (Some(Dubstep), &["Wobble Bass", "Sub Bass", "Distorted Bass"]),
            (Some(Reggae), &["Electric Bass", "Synth Bass", "Dub Bass"]),
            (Some(Electronica), &["Analog Bass", "FM Bass", "Modular Bass"]),
        ],
    },
    OptionEntry {
        section: SectionId::Bass,
        category: Category::BassPatternStyle,
        lists: &[
            (Some(Chillhop), &["Laid-back Groove", "Walking Hints", "Syncopated Dots"]),
            (Some(Lofi), &["Simple Root Notes", "Held Subs", "Lazy Groove"]),
            (Some(Neosoul), &["Syncopated Neo Groove", "Slides & Ghosts", "Pocket Groove"]),
            (Some(Rnb), &["Smooth Legato", "Syncopated R&B", "Octave Jumps"]),
            (Some(Hiphop), &["Booming Root-5ths", "808 Sustains", "Syncopated Hits"]),
            (Some(Gospel), &["Walking Gospel", "Pentatonic Runs", "Octave Walks"]),
            (Some(Edm), &["Sidechained 1/8", "Offbeat Bass", "Arp Bass"]),
            (Some(Trap), &["808 Slides", "Sparse 808s", "Triplet 808s"]),
            (Some(Orchestra), &["Pizzicato Pattern", "Long Sustains", "Arco Ostinato"]),
            (Some(Dubstep), &["Wobble Pattern", "LFO Swells", "Syncopated Growls"]),
            (Some(Reggae), &["One Drop Bass", "Syncopated Skank", "Walking Dub"]),
            (Some(Electronica), &["Sequenced 16ths", "FM Pulses", "Modulated Pattern"]),
        ],
    },
    OptionEntry {
        section: SectionId::Bass,
        category: Category::BassToneCharacter,
        lists: &[
            (Some(Chillhop), &["Warm", "Round", "Vintage"]),
            (Some(Lofi), &["Muffled", "Dusty", "Tape-warped"]),
            (Some(Neosoul), &["Smooth", "Velvety", "Thick"]),
            (Some(Rnb), &["Subby", "Polished", "Clean Low-End"]),
            (Some(Hiphop), &["Deep 808", "Gritty", "Punchy"]),
            (Some(Gospel), &["Clean Low-End", "Warm Analog", "Present"]),
            (Some(Edm), &["Clean Sub", "Bright", "Reese Edge"]),
            (Some(Trap), &["Distorted 808", "Pure Sub", "Dark Sub"]),
            (Some(Orchestra), &["Wooden", "Rich", "Resonant"]),
            (Some(Dubstep), &["Growly", "Distorted", "Talking"]),
            (Some(Reggae), &["Fat", "Dubby", "Round"]),
            (Some(Electronica), &["Analog", "FM", "Textured"]),
        ],
    },
    OptionEntry {
        section: SectionId::Bass,
        category: Category::BassAccents,
        lists: &[
            (None, &["Slides", "Ghost Notes", "Octaves"]),
        ],
    },
    OptionEntry {
        section: SectionId::Melodic,
        category: Category::LeadInstrument,
        lists: &[
            (Some(Chillhop), &["Electric Piano", "Mellow Synth", "Jazz Guitar"]),
            (Some(Lofi), &["Dusty Piano", "Warm Rhodes", "Vintage Synth"]),
            (Some(Neosoul), &["Fender Rhodes", "Wurlitzer", "Neo-Soul Guitar"]),
            (Some(Rnb), &["Modern Keys", "Vintage Rhodes", "Smooth Guitar"]),
            (Some(Hiphop), &["Dark Synths", "Piano Samples", "Brass Stabs"]),
            (Some(Gospel), &["Hammond Organ", "Gospel Piano", "Electric Piano"]),
            (Some(Edm), &["Lead Synth", "Pluck Synth", "Arp Synth"]),
            (Some(Trap), &["Dark Synth Lead", "Melodic Bell", "Sampled Melody"]),
            (Some(Orchestra), &["Violin Section", "Piano", "Flute"]),
            (Some(Dubstep), &["Supersaw Lead", "Pluck Lead", "Vocal Chops"]),
            (Some(Reggae), &["Electric Guitar", "Organ", "Melodica"]),
            (Some(Electronica), &["Analog Lead", "FM Synth", "Granular Synth"]),
        ],
    },
    OptionEntry {
        section: SectionId::Melodic,
        category: Category::ChordProgression,
        lists: &[
            (Some(Chillhop), &["ii–V–I in Jazz Keys", "I–vi–IV–V", "iv–V–I Modal"]),
            (Some(Lofi), &["I–iv", "vi–IV", "i–VII–VI"]),
            (Some(Neosoul), &["Extended ii–V–I", "IVmaj7–V7–iii7", "Chromatic Passing"]),
            (Some(Rnb), &["I–V–vi–IV", "vi–IV–I–V", "ii–V–I"]),
            (Some(Hiphop), &["i–VI–VII", "i–iv", "i–v–VI"]),
            (Some(Gospel), &["I–IV–V", "I–vi–IV–V", "IV–V–I"]),
            (Some(Edm), &["vi–IV–I–V", "I–V–vi–IV", "i–VI–III–VII"]),
            (Some(Trap), &["i–VI", "i–VII–VI", "i–iv–VI"]),
            (Some(Orchestra), &["I–IV–V–I", "i–iv–V", "I–vi–ii–V"]),
            (Some(Dubstep), &["i–VI–VII", "i–v–VI", "VI–VII–i"]),
            (Some(Reggae), &["I–V–vi–IV", "I–IV–V", "ii–V–I"]),
            (Some(Electronica), &["i–VI–III", "I–V–vi", "Modal Loop"]),
        ],
    },
    OptionEntry {
        section: SectionId::Melodic,
        category: Category::HarmonicMovement,
        lists: &[
            (Some(Chillhop), &["Smooth Voice Leading", "Modal Interchange", "Passing Tones"]),
            (Some(Lofi), &["Static Harmony", "Slow Movements", "Sparse Changes"]),
            (Some(Neosoul), &["Extended Voicings", "Chromatic Approach", "Altered Dominants"]),
            (Some(Rnb), &["Subtle Extensions", "Borrowed Chords", "Suspended Resolutions"]),
            (Some(Hiphop), &["Minimal Harmony", "Sampled Changes", "Pedal Tones"]),
            (Some(Gospel), &["Circle of Fifths", "Call-and-Response", "Turnarounds"]),
            (Some(Edm), &["Looped Harmony", "Build/Release", "Suspended Pads"]),
            (Some(Trap), &["Drone Harmony", "Minor Modal", "Pitch Bends"]),
            (Some(Orchestra), &["Counterpoint", "Thematic Development", "Modulation"]),
            (Some(Dubstep), &["Sparse Harmony", "Tonal Shifts", "Suspense Holds"]),
            (Some(Reggae), &["I–IV Movement", "Offbeat Cadence", "Simple Turnarounds"]),
            (Some(Electronica), &["Evolving Texture", "Phased Harmony", "Minimal Changes"]),
        ],
    },
    OptionEntry {
        section: SectionId::Melodic,
        category: Category::SecondaryMelodic,
        lists: &[
            (Some(Chillhop), &["Counter-melody Keys", "Muted Guitar Licks", "Soft Sax Lines"]),
            (Some(Lofi), &["Bell Motifs", "Tape Keys", "Whistle Lead"]),
            (Some(Neosoul), &["Background Vocals", "Guitar Fills", "Rhodes Layers"]),
            (Some(Rnb), &["Harmony Stacks", "Synth Counterline", "Guitar Riffs"]),
            (Some(Hiphop), &["Vocal Chop Hook", "Synth Stabs", "Sampled Motif"]),
            (Some(Gospel), &["Choir Pads", "Organ Fills", "Horn Lines"]),
            (Some(Edm), &["Arp Counterline", "Pluck Layer", "Vocal Chop Topline"]),
            (Some(Trap), &["Bell Counter", "Pluck Arp", "Choir Stabs"]),
            (Some(Orchestra), &["Flute Counter", "Viola Line", "Horn Countermelody"]),
            (Some(Dubstep), &["Lead Layer", "Vocal Chop Fills", "Pluck Arp"]),
            (Some(Reggae), &["Guitar Skanks", "Organ Bubble", "Melodica Fills"]),
            (Some(Electronica), &["Textural Motif", "Sequenced Arp", "Granular Lead"]),
        ],
    },
    OptionEntry {
        section: SectionId::Texture,
        category: Category::AmbientElements,
        lists: &[
            (Some(Chillhop), &["Warm Pads", "Subtle Strings", "Vinyl Texture"]),
            (Some(Lofi), &["Analog Strings", "Dusty Atmosphere", "Tape Saturation"]),
            (Some(Neosoul), &["Lush Strings", "Warm Organ", "Analog Pads"]),
            (Some(Rnb), &["Lush Pads", "Smooth Strings", "Warm Atmosphere"]),
            (Some(Hiphop), &["Dark Atmosphere", "Urban Textures", "Minimal Pads"]),
            (Some(Gospel), &["Church Atmosphere", "Warm Reverb", "Inspirational Pads"]),
            (Some(Edm), &["Atmospheric Pads", "Sweep FX", "Ambient Layers"]),
            (Some(Trap), &["Dark Ambient Pads", "Reverb Drones", "Filtered Noise"]),
            (Some(Orchestra), &["String Section", "Brass Section", "Woodwinds"]),
            (Some(Dubstep), &["Atmospheric Pads", "Reverb Swells", "Noise Sweeps"]),
            (Some(Reggae), &["Dub Echoes", "Reverb Tails", "Atmospheric Pads"]),
            (Some(Electronica), &["Ambient Textures", "Field Recordings", "Drone Layers"]),
        ],
    },
    OptionEntry {
        section: SectionId::Texture,
        category: Category::VocalLyrical,
        lists: &[
            (
                None,
                &[
                    "Instrumental (no vocals)",
                    "Vocal chops",
                    "Lead vocal",
                    "Background harmonies",
                ],
            ),
        ],
    },
    OptionEntry {
        section: SectionId::Texture,
        category: Category::SoundEffects,
        lists: &[
            (Some(Chillhop), &["Vinyl Noise", "Reverse Cymbals", "Cassette Stops"]),
            (Some(Lofi), &["Tape Hiss", "Button Clicks", "Field Noise"]),
            (Some(Neosoul), &["Subtle Whooshes", "Room Noise", "Reverse Swells"]),
            (Some(Rnb), &["Reverse FX", "Impact Hits", "Ear Candy FX"]),
            (Some(Hiphop), &["Tape Stop", "Record Stops", "Vocal Stutters"]),
            (Some(Gospel), &["Room Ambience", "Breath FX", "Subtle Rises"]),
            (Some(Edm), &["Risers", "Downlifters", "Impacts"]),
            (Some(Trap), &["Risers", "808 Booms", "Glitches"]),
            (Some(Orchestra), &["Cymbal Rolls", "Sub Drops", "Hall Swells"]),
            (Some(Dubstep), &["Growl FX", "Risers", "Impacts"]),
            (Some(Reggae), &["Dub Echo FX", "Spring Reverb FX", "Tape Delay Hits"]),
            (Some(Electronica), &["Glitch FX", "Bitcrush FX", "Granular Swells"]),
        ],
    },
    OptionEntry {
        section: SectionId::Texture,
        category: Category::SpatialElements,
        lists: &[
            (Some(Chillhop), &["Wide Pads", "Roomy Drums", "Subtle Delay Tails"]),
            (Some(Lofi), &["Tape Wow Flutter", "Narrow Mono", "Springy Space"]),
            (Some(Neosoul), &["Warm Room Verb", "Stereo Keys", "Short Delay"]),
            (Some(Rnb), &["Plate Vocals", "Tight Room", "Stereo Spread"]),
            (Some(Hiphop), &["Tight Room", "Mono Focus", "Slap Delay"]),
            (Some(Gospel), &["Large Hall", "Plate Verb", "Roomy Drums"]),
            (Some(Edm), &["Wide Stereo", "Long Reverb", "Ping-pong Delay"]),
            (Some(Trap), &["Wide 808", "Short Room", "Stereo FX"]),
            (Some(Orchestra), &["Concert Hall", "Stage Ambience", "Wide Strings"]),
            (Some(Dubstep), &["Wide Leads", "Long FX Tails", "Mid/Side Width"]),
            (Some(Reggae), &["Dub Delays", "Spring Reverb", "Stereo Space"]),
            (Some(Electronica), &["Granular Space", "Diffused Reverb", "MS Width"]),
        ],
    },
    OptionEntry {
        section: SectionId::Production,
        category: Category::MixStyle,
        lists: &[
            (Some(Chillhop), &["Clean & Warm", "Lo-Fi Dusty", "Vintage Analog"]),
            (Some(Lofi), &["Dusty Vintage", "Analog Compressed", "Tape Warped"]),
            (Some(Neosoul), &["Warm Analog", "Live Studio", "Vintage Console"]),
            (Some(Rnb), &["Modern Polish", "Vintage Warmth", "Contemporary Mix"]),
            (Some(Hiphop), &["Hard & Punchy", "Lo-Fi Dusty", "Modern Clean"]),
            (Some(Gospel), &["Live Church", "Vintage Gospel", "Modern Worship"]),
            (Some(Edm), &["Loud & Punchy", "Clean Digital", "Analog Warmth"]),
            (Some(Trap), &["Loud and Punchy", "Dark and Gritty", "Polished Mainstream"]),
            (Some(Orchestra), &["Concert Hall", "Studio Recording", "Live Performance"]),
            (Some(Dubstep), &["Loud & Aggressive", "Clean & Punchy", "Distorted & Heavy"]),
            (Some(Reggae), &["Dub Style", "Clean & Punchy", "Vintage Analog"]),
            (Some(Electronica), &["Clean Digital", "Analog Warmth", "Experimental"]),
        ],
    },
    OptionEntry {
        section: SectionId::Production,
        category: Category::EffectsProcessing,
        lists: &[
            (Some(Chillhop), &["Tape Saturation", "Light Compression", "Gentle Sidechain"]),
            (Some(Lofi), &["Heavy Tape", "Bitcrush", "Wow & Flutter"]),
            (Some(Neosoul), &["Analog Saturation", "Glue Compression", "Subtle Chorus"]),
            (Some(Rnb), &["Parallel Compression", "De-ess & EQ", "Saturation Bus"]),
            (Some(Hiphop), &["Hard Clip", "Bitcrush Sprinkles", "Parallel Drum Comp"]),
            (Some(Gospel), &["Hall Reverb", "Parallel Drum Bus", "Tape Glue"]),
            (Some(Edm), &["Sidechain Pump", "OTT", "Stereo Imaging"]),
            (Some(Trap), &["808 Distortion", "Transient Shaping", "Sidechain Ducking"]),
            (Some(Orchestra), &["Natural Reverb", "Minimal Compression", "Spot Mics Blend"]),
            (Some(Dubstep), &["OTT & Distortion", "LFO Modulation", "Stereo FX Chains"]),
            (Some(Reggae), &["Spring Reverb", "Tape Delay", "Dub Filters"]),
            (Some(Electronica), &["Granular FX", "Modulation FX", "Saturation"]),
        ],
    },
    OptionEntry {
        section: SectionId::Production,
        category: Category::OverallVibe,
        lists: &[
            (Some(Chillhop), &["Relaxed & Chill", "Contemplative", "Nostalgic"]),
            (Some(Lofi), &["Dreamy & Nostalgic", "Melancholic", "Cozy & Intimate"]),
            (Some(Neosoul), &["Soulful & Smooth", "Sophisticated", "Emotional & Deep"]),
            (Some(Rnb), &["Smooth & Sensual", "Emotional & Powerful", "Contemporary Cool"]),
            (Some(Hiphop), &["Aggressive & Hard", "Dark & Moody", "Confident & Bold"]),
            (Some(Gospel), &["Uplifting & Joyful", "Spiritual & Moving", "Celebratory"]),
            (Some(Edm), &["Energetic & Uplifting", "Emotional Progressive", "Dance Euphoric"]),
            (Some(Trap), &["Aggressive & Dark", "Energetic and Hype", "Melancholic and Wavy"]),
            (Some(Orchestra), &["Majestic & Grand", "Emotional & Dramatic", "Peaceful & Serene"]),
            (Some(Dubstep), &["Aggressive & Intense", "Emotional & Melodic", "Dark & Heavy"]),
            (Some(Reggae), &["Laid-back & Groovy", "Uplifting & Positive", "Spiritual & Deep"]),
            (
                Some(Electronica),
                &[
                    "Atmospheric & Dreamy",
                    "Experimental & Abstract",
                    "Minimal & Clean",
                ],
            ),
        ],
    },
    OptionEntry {
        section: SectionId::Production,
        category: Category::EraTimePeriod,
        lists: &[
            (Some(Chillhop), &["Modern Chill", "90s Boom Bap Vibe", "2000s Neo Soul"]),
            (Some(Lofi), &["Cassette 90s", "Bedroom 2010s", "Vintage 70s"]),
            (Some(Neosoul), &["2000s Neo Soul", "Modern Neo Soul", "90s R&B/Soul"]),
            (Some(Rnb), &["90s R&B", "2000s Contemporary", "Modern R&B"]),
            (Some(Hiphop), &["90s Boom Bap", "2000s Underground", "Modern Trap Era"]),
            (Some(Gospel), &["Traditional", "90s Contemporary", "Modern Worship"]),
            (Some(Edm), &["2010s Progressive", "Modern EDM", "Early 2000s House"]),
            (Some(Trap), &["2010s Trap", "Modern Trap", "Phonk Influence"]),
            (Some(Orchestra), &["Romantic Era", "Modern Film Score", "Baroque Influence"]),
            (Some(Dubstep), &["2010s Brostep", "Melodic 2014", "Modern Hybrid Bass"]),
            (Some(Reggae), &["70s Roots", "80s Dancehall", "Modern Reggae Fusion"]),
            (Some(Electronica), &["Early IDM 90s", "2000s Glitch", "Modern Downtempo"]),
        ],
    },
];
