use anyhow::{Result, bail};
use destiny_api::endpoints;

pub fn list(group: Option<&str>) -> Result<()> {
    let groups: Vec<(&str, &[&destiny_api::Endpoint])> = match group {
        Some(name) => match endpoints::group(name) {
            Some(table) => vec![(table.first().map_or(name, |e| e.category()), table)],
            None => bail!(
                "unknown endpoint group {name:?}; known groups: {}",
                endpoints::GROUPS
                    .iter()
                    .map(|(category, _)| *category)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => endpoints::GROUPS.to_vec(),
    };

    for (category, table) in groups {
        println!("{category} ({})", table.len());
        for endpoint in table {
            println!("  {:<45} {endpoint}", endpoint.operation());
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_list_known_and_unknown_groups() {
        assert!(list(None).is_ok());
        assert!(list(Some("socIAL")).is_ok());

        let err = list(Some("Nope")).expect_err("should fail");
        assert!(err.to_string().contains("GroupV2"), "{err}");
    }
}
