//! Bundled ribbon and mark definitions, grouped by the generation that
//! introduced them.

use super::types::Ribbon;

const HOENN_GBA: &[&str] = &["ruby", "sapphire", "emerald"];
const SINNOH: &[&str] = &["diamond", "pearl", "platinum"];
const GEN4_ALL: &[&str] = &["diamond", "pearl", "platinum", "heartgold", "soulsilver"];
const UNOVA: &[&str] = &["black", "white", "black2", "white2"];
const GEN6_ALL: &[&str] = &["x", "y", "oras"];
const ALOLA: &[&str] = &["sun", "moon", "usum"];
const GALAR: &[&str] = &["sword", "shield"];
const PALDEA: &[&str] = &["scarlet", "violet"];

pub(crate) fn ribbons() -> Vec<Ribbon> {
    let mut all = Vec::new();
    all.extend(gen3());
    all.extend(gen4());
    all.extend(gen5());
    all.extend(gen6());
    all.extend(gen7());
    all.extend(gen8());
    all.extend(gen9());
    all.extend(marks());
    all
}

fn contest_rank(
    id_prefix: &str,
    label: &str,
    condition: &str,
    ranks: &[(&str, &str)],
    generation: u32,
    games: &[&str],
) -> Vec<Ribbon> {
    ranks
        .iter()
        .map(|(rank_id, rank_label)| {
            let id = if rank_id.is_empty() {
                format!("{}-ribbon", id_prefix)
            } else {
                format!("{}-ribbon-{}", id_prefix, rank_id)
            };
            let name = if rank_label.is_empty() {
                format!("{} Ribbon", label)
            } else {
                format!("{} Ribbon {}", label, rank_label)
            };
            let description = if rank_label.is_empty() {
                format!("Won the Normal Rank {} Contest.", condition)
            } else {
                format!("Won the {} Rank {} Contest.", rank_label, condition)
            };
            Ribbon::new(&id, &name, &description, generation, games, "contest")
        })
        .collect()
}

fn gen3() -> Vec<Ribbon> {
    let ranks: &[(&str, &str)] = &[
        ("", ""),
        ("super", "Super"),
        ("hyper", "Hyper"),
        ("master", "Master"),
    ];
    let mut list = vec![Ribbon::new(
        "champion-hoenn",
        "Champion Ribbon",
        "Awarded for beating the Hoenn Champion and entering the Hall of Fame.",
        3,
        &["ruby", "sapphire", "emerald", "firered", "leafgreen"],
        "champion",
    )
    .with_requirements("Enter the Hall of Fame with this Pokémon in the party.")];

    for (prefix, label, condition) in [
        ("cool", "Cool", "Cool"),
        ("beauty", "Beauty", "Beauty"),
        ("cute", "Cute", "Cute"),
        ("smart", "Smart", "Smart"),
        ("tough", "Tough", "Tough"),
    ] {
        list.extend(contest_rank(prefix, label, condition, ranks, 3, HOENN_GBA));
    }

    list.extend([
        Ribbon::new(
            "winning-ribbon",
            "Winning Ribbon",
            "Awarded for clearing the Battle Tower Lv. 50 challenge.",
            3,
            &["ruby", "sapphire", "emerald"],
            "battle",
        )
        .with_requirements("Win 56 battles in a row in the Battle Tower Level 50 room.")
        .level_max(50),
        Ribbon::new(
            "victory-ribbon",
            "Victory Ribbon",
            "Awarded for clearing the Battle Tower Open Level challenge.",
            3,
            &["ruby", "sapphire", "emerald"],
            "battle",
        )
        .with_requirements("Win 56 battles in a row in the Battle Tower Open Level room."),
        Ribbon::new(
            "artist-ribbon",
            "Artist Ribbon",
            "Awarded for being chosen as a super sketch model.",
            3,
            HOENN_GBA,
            "contest",
        )
        .with_requirements("Win a Master Rank contest and have the portrait hung in the Lilycove Museum."),
        Ribbon::new(
            "effort-ribbon",
            "Effort Ribbon",
            "Awarded to an exceptionally hard-working Pokémon.",
            3,
            HOENN_GBA,
            "memory",
        )
        .with_requirements("Reach the maximum total of effort values and visit the Slateport Market."),
        Ribbon::new(
            "national-ribbon",
            "National Ribbon",
            "Awarded for overcoming all difficult challenges.",
            3,
            &["colosseum", "xd"],
            "memory",
        )
        .with_requirements("Purify a Shadow Pokémon.")
        .shadow_only(&["colosseum", "xd"]),
        Ribbon::new(
            "earth-ribbon",
            "Earth Ribbon",
            "Awarded for winning 100 matches in a row.",
            3,
            &["colosseum", "xd"],
            "battle",
        )
        .with_requirements("Clear Mt. Battle with 100 consecutive wins."),
    ]);
    list
}

fn gen4() -> Vec<Ribbon> {
    let ranks: &[(&str, &str)] = &[
        ("", ""),
        ("great", "Great"),
        ("ultra", "Ultra"),
        ("master", "Master"),
    ];
    let mut list = vec![Ribbon::new(
        "champion-sinnoh",
        "Sinnoh Champion Ribbon",
        "Awarded for beating the Sinnoh Champion and entering the Hall of Fame.",
        4,
        SINNOH,
        "champion",
    )
    .with_requirements("Enter the Sinnoh Hall of Fame with this Pokémon in the party.")];

    for (prefix, label, condition) in [
        ("sinnoh-cool", "Cool", "Cool"),
        ("sinnoh-beauty", "Beauty", "Beauty"),
        ("sinnoh-cute", "Cute", "Cute"),
        ("sinnoh-smart", "Smart", "Smart"),
        ("sinnoh-tough", "Tough", "Tough"),
    ] {
        list.extend(contest_rank(prefix, label, condition, ranks, 4, SINNOH));
    }

    list.extend([
        Ribbon::new(
            "ability-ribbon",
            "Ability Ribbon",
            "Awarded for defeating the Tower Tycoon at the Battle Tower.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "great-ability-ribbon",
            "Great Ability Ribbon",
            "Awarded for defeating the Tower Tycoon a second time.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "double-ability-ribbon",
            "Double Ability Ribbon",
            "Awarded for completing the Battle Tower Double Battle challenge.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "multi-ability-ribbon",
            "Multi Ability Ribbon",
            "Awarded for completing the Battle Tower Multi Battle challenge.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "pair-ability-ribbon",
            "Pair Ability Ribbon",
            "Awarded for completing the Battle Tower Link Multi Battle challenge.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "world-ability-ribbon",
            "World Ability Ribbon",
            "Awarded for completing the Wi-Fi Battle Room challenge.",
            4,
            GEN4_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "footprint-ribbon",
            "Footprint Ribbon",
            "Awarded to a Pokémon deemed a beloved partner.",
            4,
            SINNOH,
            "memory",
        )
        .with_requirements("Show the Pokémon to Dr. Footstep with maximum friendship."),
        Ribbon::new(
            "record-ribbon",
            "Record Ribbon",
            "A ribbon given for setting a remarkable record.",
            4,
            SINNOH,
            "event",
        ),
        Ribbon::new(
            "legend-ribbon",
            "Legend Ribbon",
            "Awarded for setting a legendary record.",
            4,
            SINNOH,
            "event",
        ),
        Ribbon::new(
            "gorgeous-ribbon",
            "Gorgeous Ribbon",
            "An extraordinarily gorgeous and extravagant ribbon.",
            4,
            SINNOH,
            "memory",
        )
        .with_requirements("Buy it at the Pokémon Ribbon Syndicate."),
        Ribbon::new(
            "royal-ribbon",
            "Royal Ribbon",
            "An incredibly regal ribbon with an air of nobility.",
            4,
            SINNOH,
            "memory",
        )
        .with_requirements("Buy it at the Pokémon Ribbon Syndicate."),
        Ribbon::new(
            "gorgeous-royal-ribbon",
            "Gorgeous Royal Ribbon",
            "A gorgeous and regal ribbon that is the peak of fabulous.",
            4,
            SINNOH,
            "memory",
        )
        .with_requirements("Buy it at the Pokémon Ribbon Syndicate."),
    ]);

    for (id, name, weekday, description) in [
        ("alert-ribbon", "Alert Ribbon", "Monday", "A ribbon for recalling an invigorating event that created life energy."),
        ("shock-ribbon", "Shock Ribbon", "Tuesday", "A ribbon for recalling a thrilling event that made life more exciting."),
        ("downcast-ribbon", "Downcast Ribbon", "Wednesday", "A ribbon for recalling feelings of sadness that added spice to life."),
        ("careless-ribbon", "Careless Ribbon", "Thursday", "A ribbon for recalling a careless error that helped steer life decisions."),
        ("relax-ribbon", "Relax Ribbon", "Friday", "A ribbon for recalling a refreshing event that added sparkle to life."),
        ("snooze-ribbon", "Snooze Ribbon", "Saturday", "A ribbon for recalling a deep slumber that made life soothing."),
        ("smile-ribbon", "Smile Ribbon", "Sunday", "A ribbon for recalling that smiles enrich the quality of life."),
    ] {
        list.push(
            Ribbon::new(id, name, description, 4, SINNOH, "memory").with_requirements(&format!(
                "Receive it from Julia in Sunyshore City on a {}.",
                weekday
            )),
        );
    }
    list
}

fn gen5() -> Vec<Ribbon> {
    vec![
        Ribbon::new(
            "classic-ribbon",
            "Classic Ribbon",
            "A ribbon that proclaims love for Pokémon.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "wishing-ribbon",
            "Wishing Ribbon",
            "A ribbon said to make your wish come true.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "premier-ribbon",
            "Premier Ribbon",
            "Special holiday ribbon.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "event-ribbon",
            "Event Ribbon",
            "A commemorative ribbon for participating in an event.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "birthday-ribbon",
            "Birthday Ribbon",
            "A ribbon to celebrate a birthday.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "special-ribbon",
            "Special Ribbon",
            "A special ribbon for an unforgettable occasion.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "souvenir-ribbon",
            "Souvenir Ribbon",
            "A ribbon to cherish a special memory.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "battle-champion-ribbon",
            "Battle Champion Ribbon",
            "Awarded to the champion of an official battle competition.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "regional-champion-ribbon",
            "Regional Champion Ribbon",
            "Awarded to a regional champion of an official battle competition.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "national-champion-ribbon",
            "National Champion Ribbon",
            "Awarded to a national champion of an official battle competition.",
            5,
            UNOVA,
            "event",
        ),
        Ribbon::new(
            "world-champion-ribbon",
            "World Champion Ribbon",
            "Awarded to a world champion of an official battle competition.",
            5,
            UNOVA,
            "event",
        ),
    ]
}

fn gen6() -> Vec<Ribbon> {
    vec![
        Ribbon::new(
            "champion-kalos",
            "Kalos Champion Ribbon",
            "Awarded for beating the Kalos Champion and entering the Hall of Fame.",
            6,
            &["x", "y"],
            "champion",
        ),
        Ribbon::new(
            "champion-hoenn-oras",
            "Hoenn Champion Ribbon",
            "Awarded for beating the Hoenn Champion in Omega Ruby or Alpha Sapphire.",
            6,
            &["oras"],
            "champion",
        ),
        Ribbon::new(
            "training-ribbon",
            "Training Ribbon",
            "Awarded for completing Super Training.",
            6,
            GEN6_ALL,
            "memory",
        )
        .with_requirements("Clear every secret Super Training regimen."),
        Ribbon::new(
            "best-friends-ribbon",
            "Best Friends Ribbon",
            "Awarded to a Pokémon that is a best friend.",
            6,
            GEN6_ALL,
            "memory",
        )
        .with_requirements("Max out affection in Pokémon-Amie."),
        Ribbon::new(
            "skillful-battler-ribbon",
            "Skillful Battler Ribbon",
            "Awarded for winning a Super battle series at the Battle Maison.",
            6,
            GEN6_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "expert-battler-ribbon",
            "Expert Battler Ribbon",
            "Awarded for winning a Super battle series at the Battle Maison a second time.",
            6,
            GEN6_ALL,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "contest-star-ribbon",
            "Contest Star Ribbon",
            "Awarded for winning Master Rank in all five Contest Spectacular conditions.",
            6,
            &["oras"],
            "contest",
        ),
        Ribbon::new(
            "coolness-master-ribbon",
            "Coolness Master Ribbon",
            "Awarded for winning the Master Rank Cool Contest Spectacular.",
            6,
            &["oras"],
            "contest",
        ),
        Ribbon::new(
            "beauty-master-ribbon",
            "Beauty Master Ribbon",
            "Awarded for winning the Master Rank Beauty Contest Spectacular.",
            6,
            &["oras"],
            "contest",
        ),
        Ribbon::new(
            "cuteness-master-ribbon",
            "Cuteness Master Ribbon",
            "Awarded for winning the Master Rank Cute Contest Spectacular.",
            6,
            &["oras"],
            "contest",
        ),
        Ribbon::new(
            "cleverness-master-ribbon",
            "Cleverness Master Ribbon",
            "Awarded for winning the Master Rank Clever Contest Spectacular.",
            6,
            &["oras"],
            "contest",
        ),
        Ribbon::new(
            "toughness-master-ribbon",
            "Toughness Master Ribbon",
            "Awarded for winning the Master Rank Tough Contest Spectacular.",
            6,
            &["oras"],
            "contest",
        ),
    ]
}

fn gen7() -> Vec<Ribbon> {
    vec![
        Ribbon::new(
            "champion-alola",
            "Alola Champion Ribbon",
            "Awarded for becoming the first Champion of the Alola region.",
            7,
            ALOLA,
            "champion",
        ),
        Ribbon::new(
            "battle-royal-master-ribbon",
            "Battle Royal Master Ribbon",
            "Awarded for winning the Master Rank of the Battle Royal.",
            7,
            ALOLA,
            "battle",
        ),
        Ribbon::new(
            "battle-tree-great-ribbon",
            "Battle Tree Great Ribbon",
            "Awarded for winning against a Battle Legend in the Battle Tree.",
            7,
            ALOLA,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "battle-tree-master-ribbon",
            "Battle Tree Master Ribbon",
            "Awarded for winning against a Battle Legend in Super battles in the Battle Tree.",
            7,
            ALOLA,
            "battle",
        )
        .level_max(50),
    ]
}

fn gen8() -> Vec<Ribbon> {
    vec![
        Ribbon::new(
            "champion-galar",
            "Galar Champion Ribbon",
            "Awarded for beating the Galar Champion and entering the Hall of Fame.",
            8,
            GALAR,
            "champion",
        ),
        Ribbon::new(
            "tower-master-ribbon",
            "Tower Master Ribbon",
            "Awarded for winning against a Champion in the Battle Tower.",
            8,
            GALAR,
            "battle",
        )
        .level_max(50),
        Ribbon::new(
            "master-rank-ribbon",
            "Master Rank Ribbon",
            "Awarded for winning against a Trainer in the Master Ball Tier of Ranked Battles.",
            8,
            GALAR,
            "battle",
        ),
        Ribbon::new(
            "hisui-ribbon",
            "Hisui Ribbon",
            "Awarded to a Pokémon that completed the survey of the Hisui region.",
            8,
            &["legends_arceus"],
            "memory",
        )
        .not_transferable(),
    ]
}

fn gen9() -> Vec<Ribbon> {
    vec![
        Ribbon::new(
            "champion-paldea",
            "Paldea Champion Ribbon",
            "Awarded for becoming a Champion of the Paldea region.",
            9,
            PALDEA,
            "champion",
        ),
        Ribbon::new(
            "once-in-a-lifetime-ribbon",
            "Once-in-a-Lifetime Ribbon",
            "A commemorative ribbon given to a Pokémon you met once in a lifetime.",
            9,
            PALDEA,
            "memory",
        ),
        Ribbon::new(
            "partner-ribbon",
            "Partner Ribbon",
            "A ribbon awarded for being a trusted partner.",
            9,
            PALDEA,
            "memory",
        ),
    ]
}

fn marks() -> Vec<Ribbon> {
    [
        ("jumbo-mark", "Jumbo Mark", "A mark for a particularly sizable Pokémon."),
        ("mini-mark", "Mini Mark", "A mark for a particularly petite Pokémon."),
        ("itemfinder-mark", "Itemfinder Mark", "A mark for a Pokémon that always seems to have an item."),
        ("partner-mark", "Partner Mark", "A mark for a Pokémon that shares a deep bond with you."),
        ("gourmand-mark", "Gourmand Mark", "A mark for a Pokémon that loves to eat."),
        ("alpha-mark", "Alpha Mark", "A mark for a Pokémon that ruled over its territory."),
        ("mightiest-mark", "Mightiest Mark", "A mark for a Pokémon met in a seven-star Tera Raid Battle."),
        ("titan-mark", "Titan Mark", "A mark for a Pokémon that was once a Titan."),
    ]
    .into_iter()
    .map(|(id, name, description)| {
        Ribbon::new(id, name, description, 9, PALDEA, "mark").as_mark()
    })
    .collect()
}
