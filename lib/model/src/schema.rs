//! The static entity catalogue.
//!
//! Every entity family the API exposes is described by an [`EntitySchema`]:
//! its ontology class, its route segment and the list of data properties with
//! their datatypes. The CRUD machinery is generic over these descriptions, so
//! adding an entity is a matter of adding a schema here and wiring its routes.

use crate::value::FieldKind;

/// One data property of an entity.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Property local name inside the ontology namespace, also used as the
    /// SPARQL variable and the JSON key.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Required fields must be present on create/update and are matched
    /// non-optionally in SELECT queries.
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: false,
    }
}

/// Description of one entity family.
#[derive(Debug)]
pub struct EntitySchema {
    /// Local name of the `rdf:type` class.
    pub class_name: &'static str,
    /// Path segment under `/api`.
    pub route: &'static str,
    pub fields: &'static [FieldSpec],
    /// Whether collection listings are ordered by ascending price.
    pub price_ordered: bool,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

pub static USER: EntitySchema = EntitySchema {
    class_name: "User",
    route: "users",
    fields: &[
        required("nom", FieldKind::Str),
        optional("age", FieldKind::Integer),
    ],
    price_ordered: false,
};

pub static DESTINATION: EntitySchema = EntitySchema {
    class_name: "Destination",
    route: "destinations",
    fields: &[
        required("nom", FieldKind::Str),
        optional("localisation", FieldKind::Str),
    ],
    price_ordered: false,
};

pub static HEBERGEMENT: EntitySchema = EntitySchema {
    class_name: "Hébergement",
    route: "hebergements",
    fields: &[
        required("nom", FieldKind::Str),
        optional("description", FieldKind::Str),
        optional("prix", FieldKind::Decimal),
        optional("capacite", FieldKind::Integer),
        optional("note", FieldKind::Decimal),
        optional("certifie", FieldKind::Boolean),
    ],
    price_ordered: true,
};

pub static ACTIVITE: EntitySchema = EntitySchema {
    class_name: "Activite",
    route: "activites",
    fields: &[
        required("nom", FieldKind::Str),
        optional("description", FieldKind::Str),
        optional("prix", FieldKind::Decimal),
        optional("capacite", FieldKind::Integer),
        optional("note", FieldKind::Decimal),
        optional("dateDebut", FieldKind::DateTime),
        optional("dateFin", FieldKind::DateTime),
        optional("impactCarbone", FieldKind::Str),
    ],
    price_ordered: false,
};

pub static RESTAURANT: EntitySchema = EntitySchema {
    class_name: "Restaurant",
    route: "restaurants",
    fields: &[
        required("nom", FieldKind::Str),
        optional("description", FieldKind::Str),
        optional("contact", FieldKind::Str),
        optional("note", FieldKind::Decimal),
    ],
    price_ordered: false,
};

pub static TRANSPORT: EntitySchema = EntitySchema {
    class_name: "Transport",
    route: "transports",
    fields: &[
        required("nom", FieldKind::Str),
        optional("prix", FieldKind::Decimal),
        optional("capacite", FieldKind::Integer),
        optional("description", FieldKind::Str),
    ],
    price_ordered: false,
};

pub static EVENEMENT: EntitySchema = EntitySchema {
    class_name: "Événement",
    route: "evenements",
    fields: &[
        required("nom", FieldKind::Str),
        optional("dateDebut", FieldKind::DateTime),
        optional("dateFin", FieldKind::DateTime),
        optional("capacite", FieldKind::Integer),
        optional("description", FieldKind::Str),
    ],
    price_ordered: false,
};

/// All entity families, in route registration order.
pub static ENTITIES: [&EntitySchema; 7] = [
    &USER,
    &DESTINATION,
    &HEBERGEMENT,
    &ACTIVITE,
    &RESTAURANT,
    &TRANSPORT,
    &EVENEMENT,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_requires_a_name() {
        for schema in ENTITIES {
            let nom = schema.field("nom").unwrap();
            assert!(nom.required, "{} must require nom", schema.class_name);
        }
    }

    #[test]
    fn routes_are_unique() {
        for (i, a) in ENTITIES.iter().enumerate() {
            for b in &ENTITIES[i + 1..] {
                assert_ne!(a.route, b.route);
            }
        }
    }

    #[test]
    fn only_hebergement_is_price_ordered() {
        for schema in ENTITIES {
            assert_eq!(schema.price_ordered, schema.route == "hebergements");
        }
    }
}
