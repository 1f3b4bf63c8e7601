//! Endpoint groups, one per API category
//!
//! Each group is a borrowed view of the client's [`Transport`](crate::Transport)
//! with one method per remote operation, plus a static `ENDPOINTS` table of
//! the descriptors it uses.

pub mod app;
pub mod community_content;
pub mod content;
pub mod destiny2;
pub mod fireteam;
pub mod forum;
pub mod group_v2;
pub mod platform;
pub mod social;
pub mod tokens;
pub mod trending;
pub mod user;

use std::fmt::Display;

use crate::endpoint::Endpoint;

pub use app::App;
pub use community_content::CommunityContent;
pub use content::Content;
pub use destiny2::Destiny2;
pub use fireteam::Fireteam;
pub use forum::Forum;
pub use group_v2::GroupV2;
pub use platform::Platform;
pub use social::Social;
pub use tokens::Tokens;
pub use trending::Trending;
pub use user::User;

/// Descriptor tables by category name.
pub static GROUPS: &[(&str, &[&Endpoint])] = &[
    ("App", app::ENDPOINTS),
    ("Platform", platform::ENDPOINTS),
    ("CommunityContent", community_content::ENDPOINTS),
    ("Content", content::ENDPOINTS),
    ("Destiny2", destiny2::ENDPOINTS),
    ("Fireteam", fireteam::ENDPOINTS),
    ("Forum", forum::ENDPOINTS),
    ("GroupV2", group_v2::ENDPOINTS),
    ("Social", social::ENDPOINTS),
    ("Tokens", tokens::ENDPOINTS),
    ("Trending", trending::ENDPOINTS),
    ("User", user::ENDPOINTS),
];

/// Every known endpoint descriptor.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    GROUPS.iter().flat_map(|(_, table)| table.iter().copied())
}

/// Look up a descriptor by `Category.Operation` name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Endpoint> {
    all().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Descriptors of one category (case-insensitive).
pub fn group(category: &str) -> Option<&'static [&'static Endpoint]> {
    GROUPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(category))
        .map(|(_, table)| *table)
}

/// Comma separated list for multi-value query parameters.
pub(crate) fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::DestinyComponentType;
    use std::collections::HashSet;

    #[test]
    fn test_descriptor_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all() {
            assert!(seen.insert(endpoint.name), "duplicate descriptor {}", endpoint.name);
        }
        assert_eq!(seen.len(), all().count());
    }

    #[test]
    fn test_descriptors_are_well_formed() {
        for (category, table) in GROUPS {
            assert!(!table.is_empty(), "{category} has no endpoints");
            for endpoint in *table {
                assert_eq!(endpoint.category(), *category, "{}", endpoint.name);
                assert!(endpoint.path.starts_with('/'), "{}", endpoint.name);
                assert!(endpoint.path.ends_with('/'), "{}", endpoint.name);
                assert!(!endpoint.path.contains("//"), "{}", endpoint.name);
                for segment in endpoint.path.split('/') {
                    let open = segment.contains('{');
                    let close = segment.contains('}');
                    assert_eq!(open, close, "{}: unbalanced placeholder", endpoint.name);
                    if open {
                        assert!(
                            segment.starts_with('{') && segment.ends_with('}'),
                            "{}: partial-segment placeholder",
                            endpoint.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_method_and_path_pairs_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all() {
            assert!(
                seen.insert((endpoint.method, endpoint.path)),
                "{} shares a route",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_find_by_name() {
        let endpoint = find("destiny2.getprofile").expect("descriptor should exist");
        assert_eq!(endpoint.name, "Destiny2.GetProfile");
        assert!(find("Destiny2.DoesNotExist").is_none());
    }

    #[test]
    fn test_group_lookup() {
        let social = group("social").expect("group should exist");
        assert_eq!(social.len(), 8);
        assert!(group("Nope").is_none());
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[4, 5, 7]), "4,5,7");
        assert_eq!(join::<i32>(&[]), "");
        assert_eq!(
            join(&[
                DestinyComponentType::Profiles,
                DestinyComponentType::Characters,
                DestinyComponentType::CharacterEquipment,
            ]),
            "100,200,205"
        );
    }
}
