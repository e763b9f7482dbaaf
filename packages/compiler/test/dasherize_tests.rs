/**
 * Dasherize Tests
 *
 * Conversion of capitalized tag names into component names.
 */

#[cfg(test)]
mod tests {
    use angle_bracket_polyfill::dasherize;

    #[test]
    fn should_lowercase_single_word() {
        assert_eq!(dasherize("Foo"), "foo");
        assert_eq!(dasherize("X"), "x");
    }

    #[test]
    fn should_split_words() {
        assert_eq!(dasherize("FooBar"), "foo-bar");
        assert_eq!(dasherize("fooBar"), "foo-bar");
        assert_eq!(dasherize("FooBarBaz"), "foo-bar-baz");
    }

    #[test]
    fn should_leave_dashed_names_alone() {
        assert_eq!(dasherize("already-dashed"), "already-dashed");
        assert_eq!(dasherize(""), "");
    }

    #[test]
    fn should_not_dash_after_separators() {
        assert_eq!(dasherize("Foo.Bar"), "foo.bar");
        assert_eq!(dasherize("Ui::FooBar"), "ui::foo-bar");
        assert_eq!(dasherize("@Foo"), "@foo");
        assert_eq!(dasherize("this.Foo"), "this.foo");
        assert_eq!(dasherize("Foo-Bar"), "foo-bar");
    }

    #[test]
    fn should_not_dash_after_digits() {
        assert_eq!(dasherize("H1Title"), "h1title");
    }

    #[test]
    fn should_only_touch_ascii_letters() {
        assert_eq!(dasherize("FooÉtat"), "fooÉtat");
    }

    #[test]
    fn should_be_idempotent() {
        let inputs = [
            "Foo",
            "FooBar",
            "fooBar",
            "X",
            "already-dashed",
            "Ui::FooBar",
            "XMLHttpRequest",
            "@FooBar",
            "this.FooBar",
            "Foo.Bar",
            "H1Title",
            "",
        ];

        for input in inputs {
            let once = dasherize(input);
            assert_eq!(dasherize(&once), once, "dasherize is not idempotent for {:?}", input);
        }
    }
}
