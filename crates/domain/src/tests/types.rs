// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Gender, PartnerCategory, PromotionId, Rank, UserIdentity, validate_identity,
};
use std::str::FromStr;

fn create_test_identity(name: &str) -> UserIdentity {
    UserIdentity::new(String::from(name), Gender::Female, Rank::Silver, 120, false)
}

#[test]
fn test_rank_round_trip() {
    let rank: Rank = Rank::from_str("Diamond").unwrap();
    assert_eq!(rank, Rank::Diamond);
    assert_eq!(rank.as_str(), "Diamond");
}

#[test]
fn test_rank_rejects_unknown_label() {
    let result: Result<Rank, DomainError> = Rank::from_str("Platinum");
    assert!(matches!(result, Err(DomainError::InvalidRank(_))));
}

#[test]
fn test_partner_category_parses_short_and_long_forms() {
    assert_eq!(
        PartnerCategory::parse("female").unwrap(),
        PartnerCategory::Female
    );
    assert_eq!(PartnerCategory::parse("F").unwrap(), PartnerCategory::Female);
    assert_eq!(PartnerCategory::parse("M").unwrap(), PartnerCategory::Male);
}

#[test]
fn test_partner_category_rejects_unknown_selector() {
    let result: Result<PartnerCategory, DomainError> = PartnerCategory::parse("other");
    assert!(matches!(
        result,
        Err(DomainError::InvalidPartnerCategory(_))
    ));
}

#[test]
fn test_promotion_id_trims_whitespace() {
    let id: PromotionId = PromotionId::new("  pack ");
    assert_eq!(id.value(), "pack");
}

#[test]
fn test_identity_validation_accepts_non_empty_name() {
    let identity: UserIdentity = create_test_identity("Alice");
    assert!(validate_identity(&identity).is_ok());
}

#[test]
fn test_identity_validation_rejects_empty_name() {
    let identity: UserIdentity = create_test_identity("");
    assert!(matches!(
        validate_identity(&identity),
        Err(DomainError::InvalidDisplayName(_))
    ));
}

#[test]
fn test_identity_validation_rejects_whitespace_only_name() {
    let identity: UserIdentity = create_test_identity("   ");
    assert!(validate_identity(&identity).is_err());
}

#[test]
fn test_identities_with_same_name_are_equal() {
    // Documented limitation: identity is exact string match on the
    // display name, so same-name users collide on stored state.
    let first: UserIdentity = create_test_identity("Alice");
    let second: UserIdentity = create_test_identity("Alice");
    assert_eq!(first.display_name, second.display_name);
}
