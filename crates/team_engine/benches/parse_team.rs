//! Benchmarks for team parsing and stat derivation.
//!
//! Run with:
//!   cargo bench --package team_engine --bench parse_team

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use team_engine::core_data::{ItemFlags, MoveFlags};
use team_engine::pipeline::build_team;
use team_engine::stats::derive_stats;
use team_engine::{parse_team, summarize, ParseMode, StatSpread, StaticCatalog};

const TEAM: &str = "Playstyle: Balance
Gliscor (F) @ Toxic Orb
Ability: Poison Heal
Tera Type: Water
EVs: 244 HP / 88 Def / 176 Spe
Impish Nature
- Spikes
- Knock Off
- Toxic
- Protect

Toxapex @ Black Sludge
Ability: Regenerator
EVs: 252 HP / 252 Def / 4 SpD
Bold Nature
IVs: 0 Atk
- Recover
- Haze
- Toxic Spikes
- Knock Off

Lando (Landorus-Therian) (M) @ Rocky Helmet
Ability: Intimidate
EVs: 252 HP / 4 Def / 252 Spe
Jolly Nature
- Earthquake
- U-turn
- Stone Edge
- Stealth Rock

Meowstic (F) @ Light Clay
Ability: Prankster
EVs: 252 HP / 4 Def / 252 Spe
Timid Nature
IVs: 0 Atk
- Reflect
- Light Screen
- Thunder Wave
- Yawn
";

fn catalog() -> StaticCatalog {
    let mut catalog = StaticCatalog::new();
    catalog
        .insert_species("gliscor", StatSpread::from_array([75, 95, 125, 45, 75, 95]))
        .insert_species("toxapex", StatSpread::from_array([50, 63, 152, 53, 142, 35]))
        .insert_species("landorus-therian", StatSpread::from_array([89, 145, 90, 105, 80, 91]))
        .insert_species("meowstic-female", StatSpread::from_array([74, 48, 76, 83, 81, 104]))
        .insert_move("recover", MoveFlags::RECOVERY)
        .insert_move("stealth-rock", MoveFlags::HAZARD)
        .insert_item("black-sludge", ItemFlags::DEFENSIVE)
        .insert_item("rocky-helmet", ItemFlags::DEFENSIVE);
    catalog
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_team_4", |b| b.iter(|| parse_team(black_box(TEAM))));
}

fn bench_derive_stats(c: &mut Criterion) {
    let base = StatSpread::from_array([75, 95, 125, 45, 75, 95]);
    let evs = StatSpread::from_array([244, 0, 88, 0, 0, 176]);
    let ivs = StatSpread::splat(31);

    c.bench_function("derive_stats", |b| {
        b.iter(|| derive_stats(black_box(&base), black_box(&evs), black_box(&ivs), black_box("Impish")))
    });
}

fn bench_build_and_summarize(c: &mut Criterion) {
    let catalog = catalog();

    let mut group = c.benchmark_group("build_and_summarize");
    for batch_size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), batch_size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    if let Ok(team) = build_team(black_box(TEAM), &catalog, ParseMode::Tolerant) {
                        black_box(summarize(&team.members, &catalog));
                    }
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_derive_stats, bench_build_and_summarize);
criterion_main!(benches);
