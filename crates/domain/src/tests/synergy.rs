// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    PartnerCategory, SimulatorInput, SynergyImpact, SynergyRule, VOLUME_MAX, compute_impacts,
    standard_rules,
};

fn simulate(
    category: PartnerCategory,
    starter_bundle: bool,
    volume: u32,
) -> Vec<SynergyImpact> {
    let input: SimulatorInput = SimulatorInput::new(category, starter_bundle, volume);
    compute_impacts(&input, &standard_rules())
}

#[test]
fn test_female_with_starter_bundle_fires_all_three_rules() {
    let impacts: Vec<SynergyImpact> = simulate(PartnerCategory::Female, true, 200);

    assert_eq!(impacts.len(), 3);
    assert_eq!(impacts[0].promotion, "Celavive Phuket Trip");
    assert_eq!(impacts[0].effect, "+1 direct sponsorship / +220 pts");
    assert_eq!(impacts[1].promotion, "One Team Challenge");
    assert_eq!(impacts[2].promotion, "Phu Quoc / Prague");
    assert_eq!(impacts[2].effect, "200 CP counts as growth volume");
}

#[test]
fn test_male_with_starter_bundle_skips_recruitment_rule() {
    let impacts: Vec<SynergyImpact> = simulate(PartnerCategory::Male, true, 200);

    assert_eq!(impacts.len(), 2);
    assert_eq!(impacts[0].promotion, "One Team Challenge");
    assert_eq!(impacts[1].promotion, "Phu Quoc / Prague");
}

#[test]
fn test_no_starter_bundle_suppresses_both_bundle_gated_rules() {
    // Regardless of category, only the growth-volume rule fires.
    for category in [PartnerCategory::Female, PartnerCategory::Male] {
        let impacts: Vec<SynergyImpact> = simulate(category, false, 500);
        assert_eq!(impacts.len(), 1);
        assert_eq!(impacts[0].promotion, "Phu Quoc / Prague");
    }
}

#[test]
fn test_growth_volume_rule_always_fires() {
    let impacts: Vec<SynergyImpact> = simulate(PartnerCategory::Male, false, 0);
    assert_eq!(impacts.len(), 1);
    assert_eq!(impacts[0].effect, "0 CP counts as growth volume");
}

#[test]
fn test_volume_clamps_to_slider_maximum() {
    let input: SimulatorInput = SimulatorInput::new(PartnerCategory::Female, false, 2000);
    assert_eq!(input.projected_volume(), VOLUME_MAX);
}

#[test]
fn test_volume_snaps_down_to_step() {
    let input: SimulatorInput = SimulatorInput::new(PartnerCategory::Female, false, 377);
    assert_eq!(input.projected_volume(), 350);
}

#[test]
fn test_impact_display_names_promotion_and_effect() {
    let impacts: Vec<SynergyImpact> = simulate(PartnerCategory::Female, true, 200);
    assert_eq!(
        impacts[0].to_string(),
        "Celavive Phuket Trip: +1 direct sponsorship / +220 pts"
    );
}

#[test]
fn test_appended_rule_extends_without_altering_existing_rules() {
    let mut rules: Vec<SynergyRule> = standard_rules();
    rules.push(SynergyRule {
        name: "executive-fast-track",
        applies: |input| input.projected_volume() >= 1000,
        render: |_| SynergyImpact {
            promotion: String::from("Rank Advance Challenge"),
            effect: String::from("fast-track review triggered"),
        },
    });

    let input: SimulatorInput = SimulatorInput::new(PartnerCategory::Female, true, 1000);
    let impacts: Vec<SynergyImpact> = compute_impacts(&input, &rules);

    // Existing rules fire unchanged, the new rule appends after them.
    assert_eq!(impacts.len(), 4);
    assert_eq!(impacts[3].promotion, "Rank Advance Challenge");
}
