//! End-to-end generation tests.
//!
//! These build whole module trees the way a host would — a model-loader file
//! mirroring the kind of wiring the emitter exists for — and assert on the
//! full rendered source.

use pyemit_ast::{
    Assignment, Class, Comment, Elif, Else, Field, File, Function, FunctionCall, If, Import,
    Parameter, Return,
};
use pyemit_codegen::{EmitError, Indent, generate};

/// A realistic model-loader module: header, imports, a class wiring a model
/// and its tokenizer through call-assignments.
fn model_loader() -> File {
    File::new("ModelMicrosoftPhi2.py")
        .header_comment("Code generated by pyemit")
        .header_comment("DO NOT EDIT!")
        .import(Import::from_module("sdk").named("ModelTransformers"))
        .import(
            Import::from_module("transformers")
                .named("AutoModelForCausalLM")
                .named("AutoTokenizer"),
        )
        .class(
            Class::new("ModelMicrosoftPhi2")
                .extends("ModelTransformers")
                .method(
                    Function::new("__init__")
                        .param(Parameter::new("self"))
                        .statement(
                            Assignment::new("self.model").call(
                                FunctionCall::new("AutoModelForCausalLM.from_pretrained")
                                    .arg("\"build/microsoft/phi-2/model\"")
                                    .kwarg("device_map", "\"auto\""),
                            ),
                        )
                        .statement(
                            Assignment::new("self.tokenizer").call(
                                FunctionCall::new("AutoTokenizer.from_pretrained")
                                    .arg("\"build/microsoft/phi-2/tokenizer\""),
                            ),
                        ),
                ),
        )
}

#[test]
fn test_model_loader_snapshot() {
    let code = generate(&model_loader(), Indent::Four).unwrap();

    insta::assert_snapshot!(code, @r#"
    # Code generated by pyemit
    # DO NOT EDIT!

    from sdk import ModelTransformers
    from transformers import AutoModelForCausalLM, AutoTokenizer

    class ModelMicrosoftPhi2(ModelTransformers):
        def __init__(self):
            self.model = AutoModelForCausalLM.from_pretrained(
                "build/microsoft/phi-2/model",
                device_map = "auto"
    )
            self.tokenizer = AutoTokenizer.from_pretrained(
                "build/microsoft/phi-2/tokenizer"
    )
    "#);
}

#[test]
fn test_conditional_module() {
    let file = File::new("select.py").function(
        Function::new("pick_device")
            .param(Parameter::new("gpu_count").ty("int"))
            .returns("str")
            .statement(Comment::block([
                "Select a torch device string.",
                "Prefers CUDA, then MPS, then CPU.",
            ]))
            .statement(
                If::new("gpu_count > 0")
                    .statement(Return::value("\"cuda\""))
                    .elif(Elif::new("has_mps()").statement(Return::value("\"mps\"")))
                    .orelse(Else::new().statement(Return::value("\"cpu\""))),
            ),
    );

    let code = generate(&file, Indent::Four).unwrap();
    assert_eq!(
        code,
        "def pick_device(gpu_count: int) -> str:\n\
         \x20   \"\"\"\n\
         \x20   Select a torch device string.\n\
         \x20   Prefers CUDA, then MPS, then CPU.\n\
         \x20   \"\"\"\n\
         \x20   if gpu_count > 0:\n\
         \x20       return \"cuda\"\n\
         \x20   elif has_mps():\n\
         \x20       return \"mps\"\n\
         \x20   else:\n\
         \x20       return \"cpu\"\n\n"
    );
}

#[test]
fn test_empty_file_renders_nothing() {
    let code = generate(&File::new("empty.py"), Indent::Four).unwrap();
    assert_eq!(code, "");
}

#[test]
fn test_generation_is_idempotent() {
    let file = model_loader();
    let first = generate(&file, Indent::Four).unwrap();
    let second = generate(&file, Indent::Four).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sibling_statements_share_indentation() {
    let file = File::new("m.py").function(
        Function::new("setup")
            .statement(Assignment::new("a").value("1"))
            .statement(Assignment::new("b").value("2")),
    );

    for indent in [Indent::Four, Indent::Eight] {
        let code = generate(&file, indent).unwrap();
        let leading: Vec<usize> = code
            .lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .collect();
        assert_eq!(leading, vec![indent.width(), indent.width()]);
    }
}

#[test]
fn test_failure_keeps_annotated_partial_output() {
    let file = File::new("broken.py")
        .import(Import::plain("os"))
        .class(Class::new("Broken").field(Field::new("path", "")));

    let err = generate(&file, Indent::Four).unwrap_err();

    // "import os\n" + blank + "class Broken:\n" puts the failing field on
    // line 4; "    path: " leaves the cursor at column 10.
    assert_eq!(err.line, 4);
    assert_eq!(err.column, 10);
    assert_eq!(err.source, EmitError::EmptyFieldType);
    assert_eq!(
        err.output,
        "import os\n\nclass Broken:\n    path: \n~~~~~~~~~^^^\n"
    );
    assert_eq!(
        err.to_string(),
        "error generating code (L4, Col10): field type cannot be empty"
    );
}
