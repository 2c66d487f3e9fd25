use expect_test::expect;
use graphql_schema_docs::*;
use indoc::indoc;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn named(name: &str) -> TypeReference {
    TypeReference::named(name)
}

fn plain_renderer() -> Renderer<impl UrlResolver, PlainText> {
    Renderer::new(RendererConfig::default(), |ty: &TypeDefinition| format!("#{}", ty.name())).with_markup(PlainText)
}

fn catalog() -> Schema {
    Schema::new()
        .with_specified_definitions()
        .with_query_type("Query")
        .with_mutation_type("Mutation")
        .with_type(ObjectType::new("__Schema").with_field(FieldDefinition::new("description", named("String"))))
        .with_type(
            ObjectType::new("Query").with_field(
                FieldDefinition::new("widget", named("Widget"))
                    .with_argument(ArgumentDefinition::new("id", named("ID").non_null())),
            ),
        )
        .with_type(
            ObjectType::new("Mutation").with_field(
                FieldDefinition::new("deleteWidget", named("Boolean").non_null())
                    .with_argument(ArgumentDefinition::new("id", named("ID").non_null())),
            ),
        )
        .with_type(ObjectType::new("Widget").with_field(FieldDefinition::new("id", named("ID").non_null())))
        .with_type(ScalarType::new("DateTime"))
        .with_type(EnumType::new("sortOrder").with_value("ASC").with_value("DESC"))
        .with_directive(
            DirectiveDefinition::new("cached")
                .with_argument(ArgumentDefinition::new("ttl", named("Int")).with_default_value(60))
                .with_location(DirectiveLocation::FieldDefinition)
                .with_location(DirectiveLocation::Object),
        )
        .with_directive(
            DirectiveDefinition::new("tag")
                .with_argument(ArgumentDefinition::new("name", named("String").non_null()))
                .repeatable()
                .with_location(DirectiveLocation::FieldDefinition),
        )
}

#[test]
fn whole_schema() {
    init_logging();

    let section = plain_renderer()
        .sections(&catalog(), Target::Schema)
        .unwrap()
        .unwrap();

    assert_eq!(section.title, "GraphQL Schema definition");

    let expected = expect![[r#"
        schema {
          query: Query
          mutation: Mutation
        }

        directive @cached(ttl: Int = 60) on FIELD_DEFINITION | OBJECT

        directive @tag(name: String!) repeatable on FIELD_DEFINITION

        scalar DateTime

        type Mutation {
          deleteWidget(id: ID!): Boolean!
        }

        type Query {
          widget(id: ID!): Widget
        }

        enum sortOrder {
          ASC
          DESC
        }

        type Widget {
          id: ID!
        }
    "#]];

    expected.assert_eq(&section.description);
}

#[test]
fn introspection_types_and_builtin_scalars_are_left_out() {
    let schema = Schema::new()
        .with_type(ObjectType::new("__Type").with_field(FieldDefinition::new("name", named("String"))))
        .with_type(ScalarType::new("String"))
        .with_type(ObjectType::new("Widget").with_field(FieldDefinition::new("name", named("String"))));

    let rendered = plain_renderer().render_schema(&schema).unwrap();

    assert!(rendered.contains("type Widget"));
    assert!(!rendered.contains("__Type"));
    assert!(!rendered.contains("scalar String"));
}

#[test]
fn specified_directives_are_left_out() {
    let schema = Schema::new().with_specified_definitions();

    assert_eq!(plain_renderer().render_schema(&schema).unwrap(), "schema {\n}\n");
}

#[test]
fn directive_without_arguments_or_locations() {
    let schema = Schema::new().with_directive(DirectiveDefinition::new("internal"));

    assert_eq!(
        plain_renderer().render_schema(&schema).unwrap(),
        "schema {\n}\n\ndirective @internal\n"
    );
}

#[test]
fn schema_block_without_root_operation_types() {
    let schema = Schema::new().with_type(ObjectType::new("Widget").with_field(FieldDefinition::new("id", named("ID"))));

    let expected = expect![[r#"
        schema {
        }

        type Widget {
          id: ID
        }
    "#]];

    expected.assert_eq(&plain_renderer().render_schema(&schema).unwrap());
}

#[test]
fn schema_block_lists_subscription_last() {
    let schema = Schema::new()
        .with_subscription_type("Subscription")
        .with_query_type("Query")
        .with_type(ObjectType::new("Query"))
        .with_type(ObjectType::new("Subscription"));

    let expected = expect![[r#"
        schema {
          query: Query
          subscription: Subscription
        }

        type Query

        type Subscription
    "#]];

    expected.assert_eq(&plain_renderer().render_schema(&schema).unwrap());
}

#[test]
fn types_are_sorted_by_name_whatever_the_insertion_order() {
    let names = ["Zebra", "beta", "Item2", "apple", "Item10", "Beta", "_Private", "alpha"];

    let schema = names
        .iter()
        .fold(Schema::new(), |schema, name| schema.with_type(ScalarType::new(*name)));

    let rendered = plain_renderer().render_schema(&schema).unwrap();
    let order = rendered
        .lines()
        .filter_map(|line| line.strip_prefix("scalar "))
        .collect::<Vec<_>>();

    assert_eq!(
        order,
        ["_Private", "alpha", "apple", "beta", "Beta", "Item10", "Item2", "Zebra"]
    );
}

#[test]
fn rendering_is_deterministic() {
    let renderer = plain_renderer();
    let schema = catalog();

    let first = renderer.render_schema(&schema).unwrap();
    let second = renderer.render_schema(&schema).unwrap();

    assert_eq!(first, second);
}

#[test]
fn schema_from_json() {
    let json = indoc! {r#"
        {
          "queryType": "Query",
          "types": {
            "Query": {
              "kind": "OBJECT",
              "name": "Query",
              "fields": [
                {
                  "name": "widgets",
                  "description": "All widgets, most recent first.",
                  "arguments": [
                    { "name": "first", "type": { "named": "Int" }, "defaultValue": 10 },
                    { "name": "order", "type": { "named": "Order" }, "defaultValue": "DESC" }
                  ],
                  "type": { "nonNull": { "list": { "nonNull": { "named": "Widget" } } } }
                }
              ]
            },
            "Order": {
              "kind": "ENUM",
              "name": "Order",
              "values": [{ "name": "ASC" }, { "name": "DESC" }]
            },
            "Widget": {
              "kind": "OBJECT",
              "name": "Widget",
              "fields": [{ "name": "id", "type": { "nonNull": { "named": "ID" } } }]
            }
          }
        }
    "#};

    let schema = Schema::from_json(json).unwrap();

    let expected = expect![[r#"
        schema {
          query: Query
        }

        enum Order {
          ASC
          DESC
        }

        type Query {
          # All widgets, most recent first.
          widgets(first: Int = 10, order: Order = DESC): Widget!
        }

        type Widget {
          id: ID!
        }
    "#]];

    expected.assert_eq(&plain_renderer().render_schema(&schema).unwrap());
}

#[test]
fn schema_survives_a_json_round_trip() {
    let schema = catalog();
    let json = serde_json::to_string(&schema).unwrap();
    let read_back = Schema::from_json(&json).unwrap();

    assert_eq!(read_back, schema);
    assert_eq!(
        plain_renderer().render_schema(&read_back).unwrap(),
        plain_renderer().render_schema(&schema).unwrap()
    );
}

#[test]
fn null_default_survives_a_json_round_trip() {
    let schema = Schema::new().with_type(
        ObjectType::new("Query").with_field(
            FieldDefinition::new("widgets", named("Int"))
                .with_argument(ArgumentDefinition::new("first", named("Int")).with_default_value(serde_json::Value::Null)),
        ),
    );

    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains(r#""defaultValue":null"#), "{json}");

    let read_back = Schema::from_json(&json).unwrap();
    assert_eq!(read_back, schema);

    let expected = expect![[r#"
        schema {
        }

        type Query {
          widgets(first: Int = null): Int
        }
    "#]];

    expected.assert_eq(&plain_renderer().render_schema(&read_back).unwrap());
}

#[test]
fn absent_default_stays_absent() {
    let schema = Schema::from_json(indoc! {r#"
        {
          "types": {
            "Query": {
              "kind": "OBJECT",
              "name": "Query",
              "fields": [
                {
                  "name": "widgets",
                  "arguments": [{ "name": "first", "type": { "named": "Int" } }],
                  "type": { "named": "Int" }
                }
              ]
            }
          }
        }
    "#})
    .unwrap();

    let Some(TypeDefinition::Object(query)) = schema.get("Query") else {
        unreachable!("Query is an object type")
    };

    assert_eq!(query.fields[0].arguments[0].default_value, None);
}

#[test]
fn html_schema_links_root_types() {
    let renderer = Renderer::new(RendererConfig::default(), |ty: &TypeDefinition| {
        format!("/docs/{}.html", ty.name())
    });

    let rendered = renderer.render_schema(&catalog()).unwrap();

    assert!(rendered.starts_with(r#"<span class="keyword">schema</span> {"#));
    assert!(rendered.contains(
        r#"<span class="property">query</span>: <a class="type" href="/docs/Query.html" title="Query">Query</a>"#
    ));
    assert!(rendered.contains(r#"<span class="keyword">directive</span> <span class="keyword">@cached</span>"#));
}

#[test]
fn section_serialization() {
    let schema = Schema::new().with_type(ScalarType::new("DateTime"));
    let config = RendererConfig::default().with_title("Docs");

    let section = Renderer::new(config, |ty: &TypeDefinition| ty.name().to_owned())
        .with_markup(PlainText)
        .sections(&schema, Target::Type("DateTime"))
        .unwrap()
        .unwrap();

    insta::assert_json_snapshot!(section, @r###"
    {
      "title": "Docs",
      "description": "scalar DateTime"
    }
    "###);
}

#[test]
fn configuration_from_toml() {
    let config = RendererConfig::from_toml(indoc! {r#"
        title = "Widgets API"
        description_width = 40
    "#})
    .unwrap();

    let section = Renderer::new(config, |ty: &TypeDefinition| ty.name().to_owned())
        .with_markup(PlainText)
        .sections(&Schema::new(), Target::Schema)
        .unwrap()
        .unwrap();

    assert_eq!(section.title, "Widgets API");
    assert_eq!(section.description, "schema {\n}\n");
}

#[test]
fn renderer_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let renderer = Renderer::new(RendererConfig::default(), |ty: &TypeDefinition| format!("#{}", ty.name()));
    assert_send_sync(&renderer);

    let schema = catalog();
    let expected = renderer.render_schema(&schema).unwrap();

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| renderer.render_schema(&schema).unwrap()))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
