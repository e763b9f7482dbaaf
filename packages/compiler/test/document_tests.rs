/**
 * Template Document Tests
 *
 * Reading upstream-parser JSON, rewriting it, and writing it back.
 */

#[cfg(test)]
mod tests {
    use angle_bracket_polyfill::syntax::ast::*;
    use angle_bracket_polyfill::syntax::print;
    use angle_bracket_polyfill::{transform_document, transform_json, PolyfillError, TemplateDocument};
    use serde_json::Value;

    const FOO_BAR_DOCUMENT: &str = r#"{
        "moduleName": "app/templates/index.hbs",
        "contents": "<FooBar @a={{b}} />",
        "ast": {
            "type": "Program",
            "blockParams": [],
            "body": [
                {
                    "type": "ElementNode",
                    "tag": "fooBar",
                    "attributes": [
                        {
                            "type": "AttrNode",
                            "name": "@a",
                            "value": {
                                "type": "MustacheStatement",
                                "path": {
                                    "type": "PathExpression",
                                    "original": "b",
                                    "this": false,
                                    "data": false,
                                    "parts": ["b"],
                                    "loc": { "source": null, "start": { "line": 1, "column": 13 }, "end": { "line": 1, "column": 14 } }
                                },
                                "params": [],
                                "hash": { "type": "Hash", "pairs": [] },
                                "escaped": true,
                                "loc": { "source": null, "start": { "line": 1, "column": 11 }, "end": { "line": 1, "column": 16 } }
                            },
                            "loc": { "source": null, "start": { "line": 1, "column": 8 }, "end": { "line": 1, "column": 16 } }
                        }
                    ],
                    "modifiers": [],
                    "children": [],
                    "blockParams": [],
                    "comments": [],
                    "loc": { "source": null, "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 19 } }
                }
            ],
            "loc": { "source": null, "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 19 } }
        }
    }"#;

    const PLAIN_DOCUMENT: &str = r#"{
        "ast": {
            "type": "Program",
            "body": [
                {
                    "type": "ElementNode",
                    "tag": "div",
                    "attributes": [
                        { "type": "AttrNode", "name": "class", "value": { "type": "TextNode", "chars": "a" } }
                    ],
                    "children": [ { "type": "TextNode", "chars": "hi" } ]
                },
                {
                    "type": "ElementNode",
                    "tag": "input",
                    "selfClosing": true
                }
            ]
        }
    }"#;

    const BLOCK_DOCUMENT: &str = r#"{
        "ast": {
            "type": "Program",
            "body": [
                {
                    "type": "ElementNode",
                    "tag": "FooBar",
                    "attributes": [
                        { "type": "AttrNode", "name": "class", "value": { "type": "TextNode", "chars": "x" } },
                        {
                            "type": "AttrNode",
                            "name": "@a",
                            "value": {
                                "type": "MustacheStatement",
                                "path": { "type": "PathExpression", "original": "b", "this": false, "data": false, "parts": ["b"] },
                                "params": [],
                                "hash": { "type": "Hash", "pairs": [] }
                            }
                        }
                    ],
                    "children": [ { "type": "TextNode", "chars": "hi" } ]
                },
                {
                    "type": "ElementNode",
                    "tag": "div",
                    "attributes": [
                        { "type": "AttrNode", "name": "...attributes", "value": { "type": "TextNode", "chars": "" } }
                    ],
                    "comments": [],
                    "children": [
                        {
                            "type": "MustacheStatement",
                            "path": { "type": "PathExpression", "original": "c", "this": false, "data": false, "parts": ["c"] },
                            "strip": { "open": false, "close": true }
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn should_read_upstream_tree() {
        let document: TemplateDocument = serde_json::from_str(FOO_BAR_DOCUMENT).unwrap();
        assert_eq!(document.module_name.as_deref(), Some("app/templates/index.hbs"));

        let Statement::Element(element) = &document.ast.body[0] else {
            panic!("expected element");
        };
        assert_eq!(element.tag, "fooBar");
        assert_eq!(element.self_closing, None);
        assert_eq!(element.attributes[0].name, "@a");
        assert_eq!(element.loc.end.column, 19);
    }

    #[test]
    fn should_rewrite_document_using_its_contents() {
        let mut document: TemplateDocument = serde_json::from_str(FOO_BAR_DOCUMENT).unwrap();
        transform_document(&mut document);
        assert_eq!(print(&document.ast), "{{foo-bar a=b}}");
    }

    #[test]
    fn should_rewrite_json_to_json() {
        let output = transform_json(FOO_BAR_DOCUMENT).unwrap();
        let document: TemplateDocument = serde_json::from_str(&output).unwrap();

        let Statement::Mustache(mustache) = &document.ast.body[0] else {
            panic!("expected mustache, got {:?}", document.ast.body[0]);
        };
        assert_eq!(mustache.path.as_path().map(|p| p.original.as_str()), Some("foo-bar"));
        assert_eq!(mustache.hash.pairs[0].key, "a");
        assert_eq!(mustache.loc.end.column, 19);

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ast"]["type"], "Program");
        assert_eq!(value["ast"]["body"][0]["type"], "MustacheStatement");
        assert_eq!(value["ast"]["body"][0]["path"]["type"], "PathExpression");
        assert_eq!(value["ast"]["body"][0]["hash"]["type"], "Hash");
        assert_eq!(value["ast"]["body"][0]["hash"]["pairs"][0]["type"], "HashPair");
    }

    #[test]
    fn should_tag_every_node_in_written_json() {
        let output = transform_json(BLOCK_DOCUMENT).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ast"]["type"], "Program");

        let block = &value["ast"]["body"][0];
        assert_eq!(block["type"], "BlockStatement");
        assert_eq!(block["program"]["type"], "Program");
        assert_eq!(block["hash"]["type"], "Hash");
        assert_eq!(block["hash"]["pairs"][0]["type"], "HashPair");
        assert_eq!(block["hash"]["pairs"][0]["key"], "a");
        assert_eq!(block["hash"]["pairs"][1]["value"]["type"], "SubExpression");
        assert_eq!(block["hash"]["pairs"][1]["value"]["hash"]["type"], "Hash");

        let div = &value["ast"]["body"][1];
        assert_eq!(div["type"], "ElementNode");
        assert_eq!(div["modifiers"][0]["type"], "ElementModifierStatement");
        assert_eq!(div["modifiers"][0]["hash"]["type"], "Hash");
    }

    #[test]
    fn should_tag_attributes_of_kept_elements() {
        let output = transform_json(PLAIN_DOCUMENT).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ast"]["body"][0]["attributes"][0]["type"], "AttrNode");
    }

    #[test]
    fn should_write_back_unmodelled_parser_fields() {
        let output = transform_json(BLOCK_DOCUMENT).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        let div = &value["ast"]["body"][1];
        assert_eq!(div["comments"], serde_json::json!([]));
        assert_eq!(div["children"][0]["strip"]["close"], true);
        assert!(div.get("extra").is_none());

        let document: TemplateDocument = serde_json::from_str(&output).unwrap();
        let Statement::Element(element) = &document.ast.body[1] else {
            panic!("expected element");
        };
        assert!(element.extra.contains_key("comments"));
    }

    #[test]
    fn should_preserve_absent_self_closing_flag() {
        let output = transform_json(PLAIN_DOCUMENT).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        let div = &value["ast"]["body"][0];
        assert_eq!(div["type"], "ElementNode");
        assert!(div.get("selfClosing").is_none());

        let input = &value["ast"]["body"][1];
        assert_eq!(input["selfClosing"], true);
    }

    #[test]
    fn should_fill_missing_locations_as_synthetic() {
        let document: TemplateDocument = serde_json::from_str(PLAIN_DOCUMENT).unwrap();
        assert!(document.ast.body[0].loc().is_synthetic());
        assert_eq!(print(&document.ast), r#"<div class="a">hi</div><input />"#);
    }

    #[test]
    fn should_report_invalid_json() {
        let error = transform_json(r#"{ "ast": { "body": [ { "type": "Nope" } ] } }"#).unwrap_err();
        assert!(matches!(error, PolyfillError::Json(_)));
        assert!(error.to_string().starts_with("invalid template document"));
    }
}
