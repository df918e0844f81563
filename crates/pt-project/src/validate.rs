//! Network file validation logic.

use std::collections::{HashMap, HashSet};

use crate::schema::NetworkFile;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: u32, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: u32, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network_file(file: &NetworkFile) -> Result<(), ValidationError> {
    if file.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut element_ids = HashSet::new();
    for element in &file.elements {
        check_id(element.id, "element id")?;
        if !element_ids.insert(element.id) {
            return Err(ValidationError::DuplicateId {
                id: element.id,
                context: "elements".to_string(),
            });
        }
    }

    let mut owners: HashMap<u32, Option<u32>> = HashMap::new();
    for port in &file.ports {
        check_id(port.id, "port id")?;
        if owners.insert(port.id, port.owner).is_some() {
            return Err(ValidationError::DuplicateId {
                id: port.id,
                context: "ports".to_string(),
            });
        }
        if let Some(owner) = port.owner {
            if !element_ids.contains(&owner) {
                return Err(ValidationError::MissingReference {
                    id: owner,
                    context: format!("owner of port {}", port.id),
                });
            }
        }
        if !port.flow.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("ports[{}].flow", port.id),
                value: port.flow.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    for port in &file.ports {
        for &link in &port.links {
            if link == port.id {
                return Err(ValidationError::InvalidValue {
                    field: format!("ports[{}].links", port.id),
                    value: link.to_string(),
                    reason: "port cannot be joined to itself".to_string(),
                });
            }
            if !owners.contains_key(&link) {
                return Err(ValidationError::MissingReference {
                    id: link,
                    context: format!("links of port {}", port.id),
                });
            }
        }
    }

    for element in &file.elements {
        for &port_id in element.ports.iter().flatten() {
            match owners.get(&port_id) {
                None => {
                    return Err(ValidationError::MissingReference {
                        id: port_id,
                        context: format!("ports of element {}", element.id),
                    });
                }
                Some(&owner) if owner != Some(element.id) => {
                    return Err(ValidationError::InvalidValue {
                        field: format!("elements[{}].ports", element.id),
                        value: port_id.to_string(),
                        reason: "port is owned by another element".to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    // Every owned port must appear in its owner's port list
    let listed: HashSet<(u32, u32)> = file
        .elements
        .iter()
        .flat_map(|e| e.ports.iter().flatten().map(move |&p| (e.id, p)))
        .collect();
    for port in &file.ports {
        if let Some(owner) = port.owner {
            if !listed.contains(&(owner, port.id)) {
                return Err(ValidationError::MissingReference {
                    id: port.id,
                    context: format!("ports of element {}", owner),
                });
            }
        }
    }

    if file.export.tag_key.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "export.tag_key".to_string(),
            value: String::new(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(())
}

fn check_id(id: u32, field: &str) -> Result<(), ValidationError> {
    if id == u32::MAX {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: id.to_string(),
            reason: "reserved".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;

    fn file() -> NetworkFile {
        NetworkFile {
            version: 1,
            name: "test".to_string(),
            elements: vec![ElementDef {
                id: 1,
                name: "Pipe".to_string(),
                category: CategoryDef::Pipe,
                ports: Some(vec![10]),
                attributes: Default::default(),
            }],
            ports: vec![PortDef {
                id: 10,
                owner: Some(1),
                domain: DomainDef::Piping,
                direction: DirectionDef::Out,
                system_type: "supply".to_string(),
                flow: 1.0,
                links: vec![],
            }],
            export: ExportSettings::default(),
        }
    }

    #[test]
    fn minimal_file_is_valid() {
        assert!(validate_network_file(&file()).is_ok());
    }

    #[test]
    fn future_version_is_rejected() {
        let mut f = file();
        f.version = 9;
        assert_eq!(
            validate_network_file(&f),
            Err(ValidationError::UnsupportedVersion { version: 9 })
        );
    }

    #[test]
    fn unknown_owner_is_rejected() {
        let mut f = file();
        f.ports[0].owner = Some(99);
        assert!(matches!(
            validate_network_file(&f),
            Err(ValidationError::MissingReference { id: 99, .. })
        ));
    }

    #[test]
    fn owned_port_must_be_listed_by_owner() {
        let mut f = file();
        f.elements[0].ports = None;
        assert_eq!(
            validate_network_file(&f),
            Err(ValidationError::MissingReference {
                id: 10,
                context: "ports of element 1".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_element_id_is_rejected() {
        let mut f = file();
        let twin = f.elements[0].clone();
        f.elements.push(twin);
        assert_eq!(
            validate_network_file(&f),
            Err(ValidationError::DuplicateId {
                id: 1,
                context: "elements".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_port_id_is_rejected() {
        let mut f = file();
        let twin = f.ports[0].clone();
        f.ports.push(twin);
        assert_eq!(
            validate_network_file(&f),
            Err(ValidationError::DuplicateId {
                id: 10,
                context: "ports".to_string(),
            })
        );
    }

    #[test]
    fn self_link_is_rejected() {
        let mut f = file();
        f.ports[0].links = vec![10];
        assert!(matches!(
            validate_network_file(&f),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn foreign_port_listing_is_rejected() {
        let mut f = file();
        f.ports[0].owner = None;
        assert!(matches!(
            validate_network_file(&f),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
