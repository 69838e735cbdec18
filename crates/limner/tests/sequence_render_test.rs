//! Byte-exact output of every sequence diagram renderer.

use limner::{
    ChartingError,
    export::Format,
    sequence::SequenceDiagram,
};

type Outcome = Result<(), ChartingError>;

fn diagram(title: &str, format: Format) -> SequenceDiagram {
    SequenceDiagram::new(title, format.renderer())
}

fn no_participants(format: Format) -> String {
    diagram("Diagram Empty", format).render().unwrap()
}

#[test]
fn test_no_participants() {
    assert_eq!(
        no_participants(Format::Mermaid),
        "sequenceDiagram\nTitle: Diagram Empty\n"
    );
    assert_eq!(
        no_participants(Format::PlantUml),
        "@startuml\ntitle: Diagram Empty\n@enduml\n"
    );
    assert_eq!(
        no_participants(Format::D2),
        "title: Diagram Empty {\nshape: sequence_diagram\n}\n"
    );
    assert_eq!(
        no_participants(Format::SequenceDiagramOrg),
        "title Diagram Empty\n"
    );
}

fn only_participants(format: Format) -> String {
    let sd = diagram("Diagram Only Participants", format);
    sd.participant("First", None).unwrap();
    sd.participant("Second", None).unwrap();
    sd.render().unwrap()
}

#[test]
fn test_only_participants() {
    assert_eq!(
        only_participants(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Only Participants
participant p1 as First
participant p2 as Second
"#
    );
    assert_eq!(
        only_participants(Format::PlantUml),
        r#"@startuml
title: Diagram Only Participants
participant "First" as p1
participant "Second" as p2
@enduml
"#
    );
    assert_eq!(
        only_participants(Format::D2),
        "title: Diagram Only Participants {\n\
         shape: sequence_diagram\n\
         p1: First \n\
         p2: Second \n\
         }\n"
    );
    assert_eq!(
        only_participants(Format::SequenceDiagramOrg),
        r#"title Diagram Only Participants
participant "First" as p1
participant "Second" as p2
"#
    );
}

fn interaction(format: Format, auto_activation: bool) -> String {
    let sd = diagram("Diagram Interaction\nand Auto Activation", format)
        .with_auto_activation(auto_activation);
    let first = sd.participant("First\nParticipant", None).unwrap();
    let second = sd.participant("Second\nParticipant", None).unwrap();
    let third = sd.participant("Third\nParticipant", None).unwrap();
    let fourth = sd.participant("Fourth\nParticipant", None).unwrap();

    first
        .go_to(second, "Go to second")
        .unwrap()
        .return_to(first, "Return to first")
        .unwrap();

    first
        .go_to(third, "Go to third")
        .unwrap()
        .go_to(fourth, "Go to fourth")
        .unwrap()
        .go_to(fourth, "Go to self")
        .unwrap()
        .return_to(third, "Return to third")
        .unwrap()
        .return_to(first, "Return to first")
        .unwrap();

    sd.render().unwrap()
}

#[test]
fn test_interaction_with_auto_activation() {
    assert_eq!(
        interaction(Format::Mermaid, true),
        r#"sequenceDiagram
Title: Diagram Interaction and Auto Activation
participant p1 as First<br/>Participant
participant p2 as Second<br/>Participant
participant p3 as Third<br/>Participant
participant p4 as Fourth<br/>Participant
activate p1
p1->>p2: Go to second
activate p2
p2-->>p1: Return to first
deactivate p2
deactivate p1
activate p1
p1->>p3: Go to third
activate p3
p3->>p4: Go to fourth
activate p4
p4->>p4: Go to self
p4-->>p3: Return to third
deactivate p4
p3-->>p1: Return to first
deactivate p3
deactivate p1
"#
    );
    assert_eq!(
        interaction(Format::PlantUml, true),
        r#"@startuml
title: Diagram Interaction\nand Auto Activation
participant "First\nParticipant" as p1
participant "Second\nParticipant" as p2
participant "Third\nParticipant" as p3
participant "Fourth\nParticipant" as p4
activate p1
p1->p2: Go to second
activate p2
p2-->p1: Return to first
deactivate p2
deactivate p1
p1 -[hidden]-> p1
activate p1
p1->p3: Go to third
activate p3
p3->p4: Go to fourth
activate p4
p4->p4: Go to self
p4-->p3: Return to third
deactivate p4
p3-->p1: Return to first
deactivate p3
deactivate p1
@enduml
"#
    );
    assert_eq!(
        interaction(Format::D2, true),
        "title: Diagram Interaction\\nand Auto Activation {\n\
         shape: sequence_diagram\n\
         p1: First\\nParticipant \n\
         p2: Second\\nParticipant \n\
         p3: Third\\nParticipant \n\
         p4: Fourth\\nParticipant \n\
         p1.0 -> p2.1: Go to second\n\
         p2.1 -> p1.0: Return to first {style.stroke-dash: 3}\n\
         p1.2 -> p3.3: Go to third\n\
         p3.3 -> p4.4: Go to fourth\n\
         p4.4 -> p4.4: Go to self\n\
         p4.4 -> p3.3: Return to third {style.stroke-dash: 3}\n\
         p3.3 -> p1.2: Return to first {style.stroke-dash: 3}\n\
         }\n"
    );
    assert_eq!(
        interaction(Format::SequenceDiagramOrg, true),
        r#"title Diagram Interaction\nand Auto Activation
participant "First\nParticipant" as p1
participant "Second\nParticipant" as p2
participant "Third\nParticipant" as p3
participant "Fourth\nParticipant" as p4
activate p1
p1->p2: Go to second
activate p2
p2-->p1: Return to first
deactivate p2
deactivate p1
activate p1
p1->p3: Go to third
activate p3
p3->p4: Go to fourth
activate p4
p4->p4: Go to self
p4-->p3: Return to third
deactivate p4
p3-->p1: Return to first
deactivate p3
deactivate p1
"#
    );
}

#[test]
fn test_interaction_without_auto_activation() {
    assert_eq!(
        interaction(Format::Mermaid, false),
        r#"sequenceDiagram
Title: Diagram Interaction and Auto Activation
participant p1 as First<br/>Participant
participant p2 as Second<br/>Participant
participant p3 as Third<br/>Participant
participant p4 as Fourth<br/>Participant
p1->>p2: Go to second
p2-->>p1: Return to first
p1->>p3: Go to third
p3->>p4: Go to fourth
p4->>p4: Go to self
p4-->>p3: Return to third
p3-->>p1: Return to first
"#
    );
    assert_eq!(
        interaction(Format::PlantUml, false),
        r#"@startuml
title: Diagram Interaction\nand Auto Activation
participant "First\nParticipant" as p1
participant "Second\nParticipant" as p2
participant "Third\nParticipant" as p3
participant "Fourth\nParticipant" as p4
p1->p2: Go to second
p2-->p1: Return to first
p1->p3: Go to third
p3->p4: Go to fourth
p4->p4: Go to self
p4-->p3: Return to third
p3-->p1: Return to first
@enduml
"#
    );
    assert_eq!(
        interaction(Format::D2, false),
        "title: Diagram Interaction\\nand Auto Activation {\n\
         shape: sequence_diagram\n\
         p1: First\\nParticipant \n\
         p2: Second\\nParticipant \n\
         p3: Third\\nParticipant \n\
         p4: Fourth\\nParticipant \n\
         p1 -> p2: Go to second\n\
         p2 -> p1: Return to first {style.stroke-dash: 3}\n\
         p1 -> p3: Go to third\n\
         p3 -> p4: Go to fourth\n\
         p4 -> p4: Go to self\n\
         p4 -> p3: Return to third {style.stroke-dash: 3}\n\
         p3 -> p1: Return to first {style.stroke-dash: 3}\n\
         }\n"
    );
    assert_eq!(
        interaction(Format::SequenceDiagramOrg, false),
        r#"title Diagram Interaction\nand Auto Activation
participant "First\nParticipant" as p1
participant "Second\nParticipant" as p2
participant "Third\nParticipant" as p3
participant "Fourth\nParticipant" as p4
p1->p2: Go to second
p2-->p1: Return to first
p1->p3: Go to third
p3->p4: Go to fourth
p4->p4: Go to self
p4-->p3: Return to third
p3-->p1: Return to first
"#
    );
}

fn manual_activation(format: Format) -> String {
    let sd = diagram("Diagram Interaction and Manual Activation", format)
        .with_auto_activation(false);
    let first = sd.participant("First", None).unwrap();
    let second = sd.participant("Second", None).unwrap();

    let result: Outcome = first.activate(None, || -> Outcome {
        first.go_to(second, "Go to second")?;
        second.activate(None, || -> Outcome {
            second.go_to(second, "Go to self")?;
            second.return_to(first, "Return to first")?;
            Ok(())
        })
    });
    result.unwrap();

    sd.render().unwrap()
}

#[test]
fn test_manual_activation() {
    let uml_body = r#"activate p1
p1->p2: Go to second
activate p2
p2->p2: Go to self
p2-->p1: Return to first
deactivate p2
deactivate p1
"#;
    assert_eq!(
        manual_activation(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Interaction and Manual Activation
participant p1 as First
participant p2 as Second
activate p1
p1->>p2: Go to second
activate p2
p2->>p2: Go to self
p2-->>p1: Return to first
deactivate p2
deactivate p1
"#
    );
    assert_eq!(
        manual_activation(Format::PlantUml),
        format!(
            "@startuml\n\
             title: Diagram Interaction and Manual Activation\n\
             participant \"First\" as p1\n\
             participant \"Second\" as p2\n\
             {uml_body}@enduml\n"
        )
    );
    assert_eq!(
        manual_activation(Format::D2),
        "title: Diagram Interaction and Manual Activation {\n\
         shape: sequence_diagram\n\
         p1: First \n\
         p2: Second \n\
         p1.0 -> p2.1: Go to second\n\
         p2.1 -> p2.1: Go to self\n\
         p2.1 -> p1.0: Return to first {style.stroke-dash: 3}\n\
         }\n"
    );
    assert_eq!(
        manual_activation(Format::SequenceDiagramOrg),
        format!(
            "title Diagram Interaction and Manual Activation\n\
             participant \"First\" as p1\n\
             participant \"Second\" as p2\n\
             {uml_body}"
        )
    );
}

fn grouping(format: Format) -> String {
    let sd = diagram("Diagram Interaction and Grouping", format);
    let first = sd.participant("First", None).unwrap();
    let second = sd.participant("Second", None).unwrap();
    let third = sd.participant("Third", None).unwrap();

    let result: Outcome = sd.group("Group enclosing everything", None, || -> Outcome {
        first.go_to(second, "Go to second")?;
        sd.group(
            "Group enclosing interaction\nbetween second and third",
            None,
            || -> Outcome {
                second
                    .go_to(third, "Go to third")?
                    .return_to(second, "Return to second")?;
                Ok(())
            },
        )?;
        second.return_to(first, "Return to first")?;
        Ok(())
    });
    result.unwrap();

    sd.render().unwrap()
}

#[test]
fn test_grouping() {
    assert_eq!(
        grouping(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Interaction and Grouping
participant p1 as First
participant p2 as Second
participant p3 as Third
rect rgb(121, 210, 166)
note right of p1: Group enclosing everything
activate p1
p1->>p2: Go to second
activate p2
rect rgb(51, 153, 102)
note right of p2: Group enclosing interaction<br/>between second and third
p2->>p3: Go to third
activate p3
p3-->>p2: Return to second
deactivate p3
end
p2-->>p1: Return to first
deactivate p2
deactivate p1
end
"#
    );
    assert_eq!(
        grouping(Format::PlantUml),
        r#"@startuml
title: Diagram Interaction and Grouping
participant "First" as p1
participant "Second" as p2
participant "Third" as p3
group Group enclosing everything
activate p1
p1->p2: Go to second
activate p2
group Group enclosing interaction\nbetween second and third
p2->p3: Go to third
activate p3
p3-->p2: Return to second
deactivate p3
end
p2-->p1: Return to first
deactivate p2
deactivate p1
end
@enduml
"#
    );
    assert_eq!(
        grouping(Format::D2),
        r#"title: Diagram Interaction and Grouping {
shape: sequence_diagram
p1: First 
p2: Second 
p3: Third 
Group enclosing everything: {
p1.0 -> p2.1: Go to second
Group enclosing interaction\nbetween second and third: {
p2.1 -> p3.2: Go to third
p3.2 -> p2.1: Return to second {style.stroke-dash: 3}
}
p2.1 -> p1.0: Return to first {style.stroke-dash: 3}
}
}
"#
    );
    assert_eq!(
        grouping(Format::SequenceDiagramOrg),
        r#"title Diagram Interaction and Grouping
participant "First" as p1
participant "Second" as p2
participant "Third" as p3
group [Group enclosing everything]
activate p1
p1->p2: Go to second
activate p2
group [Group enclosing interaction between second and third]
p2->p3: Go to third
activate p3
p3-->p2: Return to second
deactivate p3
end
p2-->p1: Return to first
deactivate p2
deactivate p1
end
"#
    );
}

fn loops(format: Format) -> String {
    let sd = diagram("Diagram Interaction and Loops", format);
    let first = sd.participant("First", None).unwrap();
    let second = sd.participant("Second", None).unwrap();

    let result: Outcome = sd.loop_("Infinite loop", None, || -> Outcome {
        first.go_to(second, "Send request to second")?;
        sd.loop_("Repeat\nuntil available", None, || -> Outcome {
            second.go_to(second, "Check internal state")?;
            Ok(())
        })?;
        sd.return_("Return response")?;
        Ok(())
    });
    result.unwrap();

    sd.render().unwrap()
}

#[test]
fn test_loops() {
    assert_eq!(
        loops(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Interaction and Loops
participant p1 as First
participant p2 as Second
loop Infinite loop
activate p1
p1->>p2: Send request to second
activate p2
loop Repeat<br/>until available
p2->>p2: Check internal state
end
p2-->>p1: Return response
deactivate p2
deactivate p1
end
"#
    );
    assert_eq!(
        loops(Format::PlantUml),
        r#"@startuml
title: Diagram Interaction and Loops
participant "First" as p1
participant "Second" as p2
loop Infinite loop
activate p1
p1->p2: Send request to second
activate p2
loop Repeat\nuntil available
p2->p2: Check internal state
end
p2-->p1: Return response
deactivate p2
deactivate p1
end
@enduml
"#
    );
    assert_eq!(
        loops(Format::D2),
        r##"title: Diagram Interaction and Loops {
shape: sequence_diagram
p1: First 
p2: Second 
LOOP Infinite loop: {
style: {
border-radius: 50
fill: "#ffdfbf"
}
p1.0 -> p2.1: Send request to second
LOOP Repeat\nuntil available: {
style: {
border-radius: 50
fill: "#ffdfbf"
}
p2.1 -> p2.1: Check internal state
}
p2.1 -> p1.0: Return response {style.stroke-dash: 3}
}
}
"##
    );
    assert_eq!(
        loops(Format::SequenceDiagramOrg),
        r#"title Diagram Interaction and Loops
participant "First" as p1
participant "Second" as p2
loop Infinite loop
activate p1
p1->p2: Send request to second
activate p2
loop Repeat until available
p2->p2: Check internal state
end
p2-->p1: Return response
deactivate p2
deactivate p1
end
"#
    );
}

fn conditions(format: Format) -> String {
    let sd = diagram("Diagram Interaction and Conditions", format).with_auto_activation(false);
    let viewer = sd.participant("Viewer", None).unwrap();
    let drama = sd.participant("Drama", None).unwrap();
    let comedy = sd.participant("Comedy", None).unwrap();

    let result: Outcome = viewer.activate(None, || -> Outcome {
        viewer.go_to(viewer, "What would I like to watch today?")?;
        Ok(())
    });
    result.unwrap();

    let result: Outcome = sd.condition(None, || -> Outcome {
        sd.case("Want a drama", None, || -> Outcome {
            viewer.activate(None, || -> Outcome {
                viewer.go_to(drama, "Watch drama")?;
                drama.activate(None, || -> Outcome {
                    drama.return_to(viewer, "Tears and sadness")?;
                    Ok(())
                })
            })
        })?;
        sd.case("Want a comedy", None, || -> Outcome {
            viewer.activate(None, || -> Outcome {
                viewer.go_to(comedy, "Watch comedy")?;
                comedy.activate(None, || -> Outcome {
                    comedy.return_to(viewer, "Laugh a lot")?;
                    Ok(())
                })
            })
        })
    });
    result.unwrap();

    sd.render().unwrap()
}

#[test]
fn test_conditions() {
    assert_eq!(
        conditions(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Interaction and Conditions
participant p1 as Viewer
participant p2 as Drama
participant p3 as Comedy
activate p1
p1->>p1: What would I like to watch today?
deactivate p1
alt Want a drama
activate p1
p1->>p2: Watch drama
activate p2
p2-->>p1: Tears and sadness
deactivate p2
deactivate p1
else Want a comedy
activate p1
p1->>p3: Watch comedy
activate p3
p3-->>p1: Laugh a lot
deactivate p3
deactivate p1
end
"#
    );
    assert_eq!(
        conditions(Format::PlantUml),
        r#"@startuml
title: Diagram Interaction and Conditions
participant "Viewer" as p1
participant "Drama" as p2
participant "Comedy" as p3
activate p1
p1->p1: What would I like to watch today?
deactivate p1
alt Want a drama
p1 -[hidden]-> p1
activate p1
p1->p2: Watch drama
activate p2
p2-->p1: Tears and sadness
deactivate p2
deactivate p1
else Want a comedy
p1 -[hidden]-> p1
activate p1
p1->p3: Watch comedy
activate p3
p3-->p1: Laugh a lot
deactivate p3
deactivate p1
end
@enduml
"#
    );
    assert_eq!(
        conditions(Format::D2),
        r##"title: Diagram Interaction and Conditions {
shape: sequence_diagram
p1: Viewer 
p2: Drama 
p3: Comedy 
p1.0 -> p1.0: What would I like to watch today?
alt1: ALT {
style: {
fill: "#ffdfbf"
}
CASE Want a drama: {
style: {
fill: "#f6c5c2"
}
p1.1 -> p2.2: Watch drama
p2.2 -> p1.1: Tears and sadness {style.stroke-dash: 3}
}
CASE Want a comedy: {
style: {
fill: "#f6c5c2"
}
p1.3 -> p3.4: Watch comedy
p3.4 -> p1.3: Laugh a lot {style.stroke-dash: 3}
}
}
}
"##
    );
    assert_eq!(
        conditions(Format::SequenceDiagramOrg),
        r#"title Diagram Interaction and Conditions
participant "Viewer" as p1
participant "Drama" as p2
participant "Comedy" as p3
activate p1
p1->p1: What would I like to watch today?
deactivate p1
alt Want a drama
activate p1
p1->p2: Watch drama
activate p2
p2-->p1: Tears and sadness
deactivate p2
deactivate p1
else Want a comedy
activate p1
p1->p3: Watch comedy
activate p3
p3-->p1: Laugh a lot
deactivate p3
deactivate p1
end
"#
    );
}

fn notes(format: Format) -> String {
    let sd = diagram("Diagram Interaction and Notes", format);
    let batman = sd.participant("Batman", None).unwrap();
    let bandit = sd.participant("Bandit", None).unwrap();

    sd.note("Batman is throwing\na batarang at the bandit", None)
        .unwrap();
    batman.go_to(bandit, "Pheeeeeeu!").unwrap();
    sd.note("Batman has missed!", None).unwrap();
    sd.return_("A bad day\nfor the Gotham :(").unwrap();
    sd.note("Batman is sad now", None).unwrap();

    sd.render().unwrap()
}

#[test]
fn test_notes() {
    assert_eq!(
        notes(Format::Mermaid),
        r#"sequenceDiagram
Title: Diagram Interaction and Notes
participant p1 as Batman
participant p2 as Bandit
note right of p1: Batman is throwing<br/>a batarang at the bandit
activate p1
p1->>p2: Pheeeeeeu!
activate p2
note right of p2: Batman has missed!
p2-->>p1: A bad day<br/>for the Gotham :(
deactivate p2
deactivate p1
note right of p1: Batman is sad now
"#
    );
    assert_eq!(
        notes(Format::PlantUml),
        r#"@startuml
title: Diagram Interaction and Notes
participant "Batman" as p1
participant "Bandit" as p2
note right of p1: Batman is throwing\na batarang at the bandit
activate p1
p1->p2: Pheeeeeeu!
activate p2
note right of p2: Batman has missed!
p2-->p1: A bad day\nfor the Gotham :(
deactivate p2
deactivate p1
note right of p1: Batman is sad now
@enduml
"#
    );
    assert_eq!(
        notes(Format::D2),
        r#"title: Diagram Interaction and Notes {
shape: sequence_diagram
p1: Batman 
p2: Bandit 
p1."Batman is throwing\na batarang at the bandit"
p1.0 -> p2.1: Pheeeeeeu!
p2.1."Batman has missed!"
p2.1 -> p1.0: A bad day\nfor the Gotham :( {style.stroke-dash: 3}
p1."Batman is sad now"
}
"#
    );
    assert_eq!(
        notes(Format::SequenceDiagramOrg),
        r#"title Diagram Interaction and Notes
participant "Batman" as p1
participant "Bandit" as p2
note right of p1: Batman is throwing\na batarang at the bandit
activate p1
p1->p2: Pheeeeeeu!
activate p2
note right of p2: Batman has missed!
p2-->p1: A bad day\nfor the Gotham :(
deactivate p2
deactivate p1
note right of p1: Batman is sad now
"#
    );
}

fn empty_transitions(format: Format) -> String {
    let sd = diagram("Empty Transitions between Participants", format);
    let first = sd.participant("First", None).unwrap();
    let second = sd.participant("Second", None).unwrap();

    first
        .go_to(second, "")
        .unwrap()
        .return_to(first, "")
        .unwrap();

    sd.render().unwrap()
}

#[test]
fn test_empty_transitions() {
    assert_eq!(
        empty_transitions(Format::Mermaid),
        "sequenceDiagram\n\
         Title: Empty Transitions between Participants\n\
         participant p1 as First\n\
         participant p2 as Second\n\
         activate p1\n\
         p1->>p2: \n\
         activate p2\n\
         p2-->>p1: \n\
         deactivate p2\n\
         deactivate p1\n"
    );
    assert_eq!(
        empty_transitions(Format::PlantUml),
        "@startuml\n\
         title: Empty Transitions between Participants\n\
         participant \"First\" as p1\n\
         participant \"Second\" as p2\n\
         activate p1\n\
         p1->p2: \n\
         activate p2\n\
         p2-->p1: \n\
         deactivate p2\n\
         deactivate p1\n\
         @enduml\n"
    );
    assert_eq!(
        empty_transitions(Format::D2),
        "title: Empty Transitions between Participants {\n\
         shape: sequence_diagram\n\
         p1: First \n\
         p2: Second \n\
         p1.0 -> p2.1: ''\n\
         p2.1 -> p1.0: '' {style.stroke-dash: 3}\n\
         }\n"
    );
    assert_eq!(
        empty_transitions(Format::SequenceDiagramOrg),
        "title Empty Transitions between Participants\n\
         participant \"First\" as p1\n\
         participant \"Second\" as p2\n\
         activate p1\n\
         p1->p2: \n\
         activate p2\n\
         p2-->p1: \n\
         deactivate p2\n\
         deactivate p1\n"
    );
}

fn ecb_types(format: Format) -> String {
    let sd = diagram("Participant types, according to ECB", format);
    let actor = sd.participant("Actor", None).unwrap().as_actor().unwrap();
    let boundary = sd
        .participant("Boundary", None)
        .unwrap()
        .as_boundary()
        .unwrap();
    let control = sd
        .participant("Control", None)
        .unwrap()
        .as_control()
        .unwrap();
    let entity = sd.participant("Entity", None).unwrap().as_entity().unwrap();

    actor
        .go_to(boundary, "Do something")
        .unwrap()
        .go_to(control, "Do something")
        .unwrap()
        .go_to(entity, "Do something")
        .unwrap();
    entity
        .return_to(control, "Return")
        .unwrap()
        .return_to(boundary, "Return")
        .unwrap()
        .return_to(actor, "Return")
        .unwrap();

    sd.render().unwrap()
}

#[test]
fn test_ecb_participant_types() {
    let uml_body = r#"activate p1
p1->p2: Do something
activate p2
p2->p3: Do something
activate p3
p3->p4: Do something
activate p4
p4-->p3: Return
deactivate p4
p3-->p2: Return
deactivate p3
p2-->p1: Return
deactivate p2
deactivate p1
"#;
    let uml_participants = r#"actor "Actor" as p1
boundary "Boundary" as p2
control "Control" as p3
entity "Entity" as p4
"#;

    assert_eq!(
        ecb_types(Format::Mermaid),
        r#"sequenceDiagram
Title: Participant types, according to ECB
actor p1 as Actor
participant p2 as Boundary
participant p3 as Control
participant p4 as Entity
activate p1
p1->>p2: Do something
activate p2
p2->>p3: Do something
activate p3
p3->>p4: Do something
activate p4
p4-->>p3: Return
deactivate p4
p3-->>p2: Return
deactivate p3
p2-->>p1: Return
deactivate p2
deactivate p1
"#
    );
    assert_eq!(
        ecb_types(Format::PlantUml),
        format!(
            "@startuml\ntitle: Participant types, according to ECB\n{uml_participants}{uml_body}@enduml\n"
        )
    );
    assert_eq!(
        ecb_types(Format::D2),
        "title: Participant types, according to ECB {\n\
         shape: sequence_diagram\n\
         p1: Actor {shape: person}\n\
         p2: Boundary \n\
         p3: Control \n\
         p4: Entity \n\
         p1.0 -> p2.1: Do something\n\
         p2.1 -> p3.2: Do something\n\
         p3.2 -> p4.3: Do something\n\
         p4.3 -> p3.2: Return {style.stroke-dash: 3}\n\
         p3.2 -> p2.1: Return {style.stroke-dash: 3}\n\
         p2.1 -> p1.0: Return {style.stroke-dash: 3}\n\
         }\n"
    );
    assert_eq!(
        ecb_types(Format::SequenceDiagramOrg),
        format!("title Participant types, according to ECB\n{uml_participants}{uml_body}")
    );
}

#[cfg(feature = "graphviz")]
#[test]
fn test_graphviz_rejects_sequence_diagrams() {
    let err = diagram("Unsupported", Format::Graphviz)
        .render()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "renderer `graphviz` does not support sequence diagrams"
    );
}
