//! Bundled species entries.

use super::types::ItemDetail;

struct Row {
    id: &'static str,
    dex: u32,
    name: &'static str,
    types: &'static [&'static str],
    generation: u32,
    category: &'static str,
    height: u32,
    weight: u32,
    abilities: &'static [&'static str],
}

const ROWS: &[Row] = &[
    Row { id: "bulbasaur", dex: 1, name: "Bulbasaur", types: &["grass", "poison"], generation: 1, category: "Seed Pokémon", height: 7, weight: 69, abilities: &["overgrow", "chlorophyll"] },
    Row { id: "charmander", dex: 4, name: "Charmander", types: &["fire"], generation: 1, category: "Lizard Pokémon", height: 6, weight: 85, abilities: &["blaze", "solar-power"] },
    Row { id: "squirtle", dex: 7, name: "Squirtle", types: &["water"], generation: 1, category: "Tiny Turtle Pokémon", height: 5, weight: 90, abilities: &["torrent", "rain-dish"] },
    Row { id: "pikachu", dex: 25, name: "Pikachu", types: &["electric"], generation: 1, category: "Mouse Pokémon", height: 4, weight: 60, abilities: &["static", "lightning-rod"] },
    Row { id: "zubat", dex: 41, name: "Zubat", types: &["poison", "flying"], generation: 1, category: "Bat Pokémon", height: 8, weight: 75, abilities: &["inner-focus", "infiltrator"] },
    Row { id: "eevee", dex: 133, name: "Eevee", types: &["normal"], generation: 1, category: "Evolution Pokémon", height: 3, weight: 65, abilities: &["run-away", "adaptability", "anticipation"] },
    Row { id: "snorlax", dex: 143, name: "Snorlax", types: &["normal"], generation: 1, category: "Sleeping Pokémon", height: 21, weight: 4600, abilities: &["immunity", "thick-fat", "gluttony"] },
    Row { id: "dragonite", dex: 149, name: "Dragonite", types: &["dragon", "flying"], generation: 1, category: "Dragon Pokémon", height: 22, weight: 2100, abilities: &["inner-focus", "multiscale"] },
    Row { id: "mewtwo", dex: 150, name: "Mewtwo", types: &["psychic"], generation: 1, category: "Genetic Pokémon", height: 20, weight: 1220, abilities: &["pressure", "unnerve"] },
    Row { id: "bayleef", dex: 153, name: "Bayleef", types: &["grass"], generation: 2, category: "Leaf Pokémon", height: 12, weight: 158, abilities: &["overgrow", "leaf-guard"] },
    Row { id: "quilava", dex: 156, name: "Quilava", types: &["fire"], generation: 2, category: "Volcano Pokémon", height: 9, weight: 190, abilities: &["blaze", "flash-fire"] },
    Row { id: "croconaw", dex: 159, name: "Croconaw", types: &["water"], generation: 2, category: "Big Jaw Pokémon", height: 11, weight: 250, abilities: &["torrent", "sheer-force"] },
    Row { id: "ledyba", dex: 165, name: "Ledyba", types: &["bug", "flying"], generation: 2, category: "Five Star Pokémon", height: 10, weight: 108, abilities: &["swarm", "early-bird", "rattled"] },
    Row { id: "togepi", dex: 175, name: "Togepi", types: &["fairy"], generation: 2, category: "Spike Ball Pokémon", height: 3, weight: 15, abilities: &["hustle", "serene-grace", "super-luck"] },
    Row { id: "espeon", dex: 196, name: "Espeon", types: &["psychic"], generation: 2, category: "Sun Pokémon", height: 9, weight: 265, abilities: &["synchronize", "magic-bounce"] },
    Row { id: "umbreon", dex: 197, name: "Umbreon", types: &["dark"], generation: 2, category: "Moonlight Pokémon", height: 10, weight: 270, abilities: &["synchronize", "inner-focus"] },
    Row { id: "misdreavus", dex: 200, name: "Misdreavus", types: &["ghost"], generation: 2, category: "Screech Pokémon", height: 7, weight: 10, abilities: &["levitate"] },
    Row { id: "gligar", dex: 207, name: "Gligar", types: &["ground", "flying"], generation: 2, category: "Fly Scorpion Pokémon", height: 11, weight: 648, abilities: &["hyper-cutter", "sand-veil", "immunity"] },
    Row { id: "heracross", dex: 214, name: "Heracross", types: &["bug", "fighting"], generation: 2, category: "Single Horn Pokémon", height: 15, weight: 540, abilities: &["swarm", "guts", "moxie"] },
    Row { id: "sneasel", dex: 215, name: "Sneasel", types: &["dark", "ice"], generation: 2, category: "Sharp Claw Pokémon", height: 9, weight: 280, abilities: &["inner-focus", "keen-eye", "pickpocket"] },
    Row { id: "teddiursa", dex: 216, name: "Teddiursa", types: &["normal"], generation: 2, category: "Little Bear Pokémon", height: 6, weight: 88, abilities: &["pickup", "quick-feet", "honey-gather"] },
    Row { id: "ursaring", dex: 217, name: "Ursaring", types: &["normal"], generation: 2, category: "Hibernator Pokémon", height: 18, weight: 1250, abilities: &["guts", "quick-feet", "unnerve"] },
    Row { id: "skarmory", dex: 227, name: "Skarmory", types: &["steel", "flying"], generation: 2, category: "Armor Bird Pokémon", height: 17, weight: 505, abilities: &["keen-eye", "sturdy", "weak-armor"] },
    Row { id: "houndour", dex: 228, name: "Houndour", types: &["dark", "fire"], generation: 2, category: "Dark Pokémon", height: 6, weight: 108, abilities: &["early-bird", "flash-fire", "unnerve"] },
    Row { id: "raikou", dex: 243, name: "Raikou", types: &["electric"], generation: 2, category: "Thunder Pokémon", height: 19, weight: 1780, abilities: &["pressure", "inner-focus"] },
    Row { id: "entei", dex: 244, name: "Entei", types: &["fire"], generation: 2, category: "Volcano Pokémon", height: 21, weight: 1980, abilities: &["pressure", "inner-focus"] },
    Row { id: "suicune", dex: 245, name: "Suicune", types: &["water"], generation: 2, category: "Aurora Pokémon", height: 20, weight: 1870, abilities: &["pressure", "inner-focus"] },
    Row { id: "tyranitar", dex: 248, name: "Tyranitar", types: &["rock", "dark"], generation: 2, category: "Armor Pokémon", height: 20, weight: 2020, abilities: &["sand-stream", "unnerve"] },
    Row { id: "lugia", dex: 249, name: "Lugia", types: &["psychic", "flying"], generation: 2, category: "Diving Pokémon", height: 52, weight: 2160, abilities: &["pressure", "multiscale"] },
    Row { id: "treecko", dex: 252, name: "Treecko", types: &["grass"], generation: 3, category: "Wood Gecko Pokémon", height: 5, weight: 50, abilities: &["overgrow", "unburden"] },
    Row { id: "torchic", dex: 255, name: "Torchic", types: &["fire"], generation: 3, category: "Chick Pokémon", height: 4, weight: 25, abilities: &["blaze", "speed-boost"] },
    Row { id: "mudkip", dex: 258, name: "Mudkip", types: &["water"], generation: 3, category: "Mud Fish Pokémon", height: 4, weight: 76, abilities: &["torrent", "damp"] },
    Row { id: "poochyena", dex: 261, name: "Poochyena", types: &["dark"], generation: 3, category: "Bite Pokémon", height: 5, weight: 136, abilities: &["run-away", "quick-feet", "rattled"] },
    Row { id: "seedot", dex: 273, name: "Seedot", types: &["grass"], generation: 3, category: "Acorn Pokémon", height: 5, weight: 40, abilities: &["chlorophyll", "early-bird", "pickpocket"] },
    Row { id: "gardevoir", dex: 282, name: "Gardevoir", types: &["psychic", "fairy"], generation: 3, category: "Embrace Pokémon", height: 16, weight: 484, abilities: &["synchronize", "trace", "telepathy"] },
    Row { id: "shroomish", dex: 285, name: "Shroomish", types: &["grass"], generation: 3, category: "Mushroom Pokémon", height: 4, weight: 45, abilities: &["effect-spore", "poison-heal", "quick-feet"] },
    Row { id: "makuhita", dex: 296, name: "Makuhita", types: &["fighting"], generation: 3, category: "Guts Pokémon", height: 10, weight: 864, abilities: &["thick-fat", "guts", "sheer-force"] },
    Row { id: "swablu", dex: 333, name: "Swablu", types: &["normal", "flying"], generation: 3, category: "Cotton Bird Pokémon", height: 4, weight: 12, abilities: &["natural-cure", "cloud-nine"] },
    Row { id: "zangoose", dex: 335, name: "Zangoose", types: &["normal"], generation: 3, category: "Cat Ferret Pokémon", height: 13, weight: 403, abilities: &["immunity", "toxic-boost"] },
    Row { id: "milotic", dex: 350, name: "Milotic", types: &["water"], generation: 3, category: "Tender Pokémon", height: 62, weight: 1620, abilities: &["marvel-scale", "competitive", "cute-charm"] },
    Row { id: "spheal", dex: 363, name: "Spheal", types: &["ice", "water"], generation: 3, category: "Clap Pokémon", height: 8, weight: 395, abilities: &["thick-fat", "ice-body", "oblivious"] },
    Row { id: "metagross", dex: 376, name: "Metagross", types: &["steel", "psychic"], generation: 3, category: "Iron Leg Pokémon", height: 16, weight: 5500, abilities: &["clear-body", "light-metal"] },
    Row { id: "rayquaza", dex: 384, name: "Rayquaza", types: &["dragon", "flying"], generation: 3, category: "Sky High Pokémon", height: 70, weight: 2065, abilities: &["air-lock"] },
    Row { id: "bidoof", dex: 399, name: "Bidoof", types: &["normal"], generation: 4, category: "Plump Mouse Pokémon", height: 5, weight: 200, abilities: &["simple", "unaware", "moody"] },
    Row { id: "garchomp", dex: 445, name: "Garchomp", types: &["dragon", "ground"], generation: 4, category: "Mach Pokémon", height: 19, weight: 950, abilities: &["sand-veil", "rough-skin"] },
    Row { id: "lucario", dex: 448, name: "Lucario", types: &["fighting", "steel"], generation: 4, category: "Aura Pokémon", height: 12, weight: 540, abilities: &["steadfast", "inner-focus", "justified"] },
    Row { id: "snivy", dex: 495, name: "Snivy", types: &["grass"], generation: 5, category: "Grass Snake Pokémon", height: 6, weight: 81, abilities: &["overgrow", "contrary"] },
    Row { id: "froakie", dex: 656, name: "Froakie", types: &["water"], generation: 6, category: "Bubble Frog Pokémon", height: 3, weight: 70, abilities: &["torrent", "protean"] },
    Row { id: "rowlet", dex: 722, name: "Rowlet", types: &["grass", "flying"], generation: 7, category: "Grass Quill Pokémon", height: 3, weight: 15, abilities: &["overgrow", "long-reach"] },
    Row { id: "grookey", dex: 810, name: "Grookey", types: &["grass"], generation: 8, category: "Chimp Pokémon", height: 3, weight: 50, abilities: &["overgrow", "grassy-surge"] },
    Row { id: "sprigatito", dex: 906, name: "Sprigatito", types: &["grass"], generation: 9, category: "Grass Cat Pokémon", height: 4, weight: 41, abilities: &["overgrow", "protean"] },
];

pub(crate) fn items() -> Vec<ItemDetail> {
    ROWS.iter()
        .map(|row| ItemDetail {
            id: row.id.to_string(),
            dex_number: row.dex,
            name: row.name.to_string(),
            types: row.types.iter().map(|t| t.to_string()).collect(),
            generation: row.generation,
            image: format!("images/pokemon/{:03}.png", row.dex),
            category: row.category.to_string(),
            height: row.height,
            weight: row.weight,
            abilities: row.abilities.iter().map(|a| a.to_string()).collect(),
        })
        .collect()
}
