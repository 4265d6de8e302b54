use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM: u32 = 106;
    pub const HIDES_INHERITED_MEMBER_USE_THE_NEW_KEYWORD: u32 = 108;
    pub const DOES_NOT_HIDE_AN_ACCESSIBLE_MEMBER: u32 = 109;
    pub const STATIC_MEMBER_CANNOT_BE_MARKED_OVERRIDE_VIRTUAL_OR_ABSTRACT: u32 = 112;
    pub const CIRCULAR_BASE_TYPE_DEPENDENCY: u32 = 146;
    pub const CANNOT_BE_EXTERN_AND_DECLARE_A_BODY: u32 = 179;
    pub const CANNOT_BE_BOTH_EXTERN_AND_ABSTRACT: u32 = 180;
    pub const CANNOT_BE_SEALED_BECAUSE_IT_IS_NOT_AN_OVERRIDE: u32 = 238;
    pub const TYPE_OR_NAMESPACE_NAME_COULD_NOT_BE_FOUND: u32 = 246;
    pub const ACCESSOR_ACCESSIBILITY_MUST_BE_MORE_RESTRICTIVE: u32 = 273;
    pub const CANNOT_SPECIFY_ACCESSIBILITY_FOR_BOTH_ACCESSORS: u32 = 274;
    pub const ACCESSOR_MODIFIERS_REQUIRE_BOTH_ACCESSORS: u32 = 276;
    pub const ABSTRACT_PROPERTIES_CANNOT_HAVE_PRIVATE_ACCESSORS: u32 = 442;
    pub const CANNOT_DECLARE_A_BODY_BECAUSE_IT_IS_MARKED_ABSTRACT: u32 = 500;
    pub const MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN: u32 = 501;
    pub const CANNOT_BE_BOTH_ABSTRACT_AND_SEALED: u32 = 502;
    pub const ABSTRACT_MEMBER_CANNOT_BE_MARKED_VIRTUAL: u32 = 503;
    pub const CANNOT_DERIVE_FROM_SEALED_TYPE: u32 = 509;
    pub const ABSTRACT_MEMBER_IN_NON_ABSTRACT_TYPE: u32 = 513;
    pub const TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE: u32 = 527;
    pub const INHERITED_INTERFACE_CAUSES_A_CYCLE: u32 = 529;
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER: u32 = 535;
    pub const EXPLICIT_INTERFACE_DECLARATION_IS_NOT_AN_INTERFACE: u32 = 538;
    pub const EXPLICIT_INTERFACE_MEMBER_NOT_FOUND: u32 = 539;
    pub const CONTAINING_TYPE_DOES_NOT_IMPLEMENT_INTERFACE: u32 = 540;
    pub const ADDS_AN_ACCESSOR_NOT_FOUND_IN_INTERFACE_MEMBER: u32 = 550;
    pub const VIRTUAL_OR_ABSTRACT_MEMBERS_CANNOT_BE_PRIVATE: u32 = 621;
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_STATIC: u32 = 736;
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_NOT_PUBLIC: u32 = 737;
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_WRONG_RETURN_TYPE: u32 = 738;
    pub const FEATURE_NOT_AVAILABLE_IN_LANGUAGE_VERSION: u32 = 8107;
    pub const TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION: u32 = 8701;
    pub const TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION_FOR_MEMBER: u32 =
        8707;
    pub const DECLARED_HERE: u32 = 9001;
}

pub mod diagnostic_messages {
    pub const THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM: &str =
        "The modifier '{0}' is not valid for this item";
    pub const HIDES_INHERITED_MEMBER_USE_THE_NEW_KEYWORD: &str =
        "'{0}' hides inherited member '{1}'. Use the new keyword if hiding was intended.";
    pub const DOES_NOT_HIDE_AN_ACCESSIBLE_MEMBER: &str =
        "The member '{0}' does not hide an accessible member. The new keyword is not required.";
    pub const STATIC_MEMBER_CANNOT_BE_MARKED_OVERRIDE_VIRTUAL_OR_ABSTRACT: &str =
        "A static member '{0}' cannot be marked as override, virtual, or abstract";
    pub const CIRCULAR_BASE_TYPE_DEPENDENCY: &str =
        "Circular base type dependency involving '{0}' and '{1}'";
    pub const CANNOT_BE_EXTERN_AND_DECLARE_A_BODY: &str =
        "'{0}' cannot be extern and declare a body";
    pub const CANNOT_BE_BOTH_EXTERN_AND_ABSTRACT: &str = "'{0}' cannot be both extern and abstract";
    pub const CANNOT_BE_SEALED_BECAUSE_IT_IS_NOT_AN_OVERRIDE: &str =
        "'{0}' cannot be sealed because it is not an override";
    pub const TYPE_OR_NAMESPACE_NAME_COULD_NOT_BE_FOUND: &str =
        "The type or namespace name '{0}' could not be found";
    pub const ACCESSOR_ACCESSIBILITY_MUST_BE_MORE_RESTRICTIVE: &str = "The accessibility modifier of the '{0}' accessor must be more restrictive than the property or indexer '{1}'";
    pub const CANNOT_SPECIFY_ACCESSIBILITY_FOR_BOTH_ACCESSORS: &str =
        "Cannot specify accessibility modifiers for both accessors of the property or indexer '{0}'";
    pub const ACCESSOR_MODIFIERS_REQUIRE_BOTH_ACCESSORS: &str = "'{0}': accessibility modifiers on accessors may only be used if the property or indexer has both a get and set accessor";
    pub const ABSTRACT_PROPERTIES_CANNOT_HAVE_PRIVATE_ACCESSORS: &str =
        "'{0}': abstract properties cannot have private accessors";
    pub const CANNOT_DECLARE_A_BODY_BECAUSE_IT_IS_MARKED_ABSTRACT: &str =
        "'{0}' cannot declare a body because it is marked abstract";
    pub const MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN: &str =
        "'{0}' must declare a body because it is not marked abstract, extern, or partial";
    pub const CANNOT_BE_BOTH_ABSTRACT_AND_SEALED: &str = "'{0}' cannot be both abstract and sealed";
    pub const ABSTRACT_MEMBER_CANNOT_BE_MARKED_VIRTUAL: &str =
        "The abstract member '{0}' cannot be marked virtual";
    pub const CANNOT_DERIVE_FROM_SEALED_TYPE: &str = "'{0}': cannot derive from sealed type '{1}'";
    pub const ABSTRACT_MEMBER_IN_NON_ABSTRACT_TYPE: &str =
        "'{0}' is abstract but it is contained in non-abstract type '{1}'";
    pub const TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE: &str =
        "Type '{0}' in interface list is not an interface";
    pub const INHERITED_INTERFACE_CAUSES_A_CYCLE: &str =
        "Inherited interface '{1}' causes a cycle in the interface hierarchy of '{0}'";
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER: &str =
        "'{0}' does not implement interface member '{1}'";
    pub const EXPLICIT_INTERFACE_DECLARATION_IS_NOT_AN_INTERFACE: &str =
        "'{0}' in explicit interface declaration is not an interface";
    pub const EXPLICIT_INTERFACE_MEMBER_NOT_FOUND: &str = "'{0}' in explicit interface declaration is not found among members of the interface that can be implemented";
    pub const CONTAINING_TYPE_DOES_NOT_IMPLEMENT_INTERFACE: &str =
        "'{0}': containing type does not implement interface '{1}'";
    pub const ADDS_AN_ACCESSOR_NOT_FOUND_IN_INTERFACE_MEMBER: &str =
        "'{0}' adds an accessor not found in interface member '{1}'";
    pub const VIRTUAL_OR_ABSTRACT_MEMBERS_CANNOT_BE_PRIVATE: &str =
        "'{0}': virtual or abstract members cannot be private";
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_STATIC: &str = "'{0}' does not implement instance interface member '{1}'. '{2}' cannot implement the interface member because it is static.";
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_NOT_PUBLIC: &str = "'{0}' does not implement interface member '{1}'. '{2}' cannot implement an interface member because it is not public.";
    pub const DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_WRONG_RETURN_TYPE: &str = "'{0}' does not implement interface member '{1}'. '{2}' cannot implement '{1}' because it does not have the matching return type of '{3}'.";
    pub const FEATURE_NOT_AVAILABLE_IN_LANGUAGE_VERSION: &str =
        "Feature '{0}' is not available in C# {1}. Please use language version {2} or greater.";
    pub const TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION: &str =
        "Target runtime doesn't support default interface implementation.";
    pub const TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION_FOR_MEMBER: &str = "Type '{1}' cannot implement interface member '{0}' with its default implementation because the target runtime doesn't support default interface implementation.";
    pub const DECLARED_HERE: &str = "'{0}' is declared here.";
}

macro_rules! messages {
    ($($name:ident => $category:ident),* $(,)?) => {
        pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
            $(DiagnosticMessage {
                code: diagnostic_codes::$name,
                category: DiagnosticCategory::$category,
                message: diagnostic_messages::$name,
            },)*
        ];
    };
}

messages! {
    THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM => Error,
    HIDES_INHERITED_MEMBER_USE_THE_NEW_KEYWORD => Warning,
    DOES_NOT_HIDE_AN_ACCESSIBLE_MEMBER => Warning,
    STATIC_MEMBER_CANNOT_BE_MARKED_OVERRIDE_VIRTUAL_OR_ABSTRACT => Error,
    CIRCULAR_BASE_TYPE_DEPENDENCY => Error,
    CANNOT_BE_EXTERN_AND_DECLARE_A_BODY => Error,
    CANNOT_BE_BOTH_EXTERN_AND_ABSTRACT => Error,
    CANNOT_BE_SEALED_BECAUSE_IT_IS_NOT_AN_OVERRIDE => Error,
    TYPE_OR_NAMESPACE_NAME_COULD_NOT_BE_FOUND => Error,
    ACCESSOR_ACCESSIBILITY_MUST_BE_MORE_RESTRICTIVE => Error,
    CANNOT_SPECIFY_ACCESSIBILITY_FOR_BOTH_ACCESSORS => Error,
    ACCESSOR_MODIFIERS_REQUIRE_BOTH_ACCESSORS => Error,
    ABSTRACT_PROPERTIES_CANNOT_HAVE_PRIVATE_ACCESSORS => Error,
    CANNOT_DECLARE_A_BODY_BECAUSE_IT_IS_MARKED_ABSTRACT => Error,
    MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN => Error,
    CANNOT_BE_BOTH_ABSTRACT_AND_SEALED => Error,
    ABSTRACT_MEMBER_CANNOT_BE_MARKED_VIRTUAL => Error,
    CANNOT_DERIVE_FROM_SEALED_TYPE => Error,
    ABSTRACT_MEMBER_IN_NON_ABSTRACT_TYPE => Error,
    TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE => Error,
    INHERITED_INTERFACE_CAUSES_A_CYCLE => Error,
    DOES_NOT_IMPLEMENT_INTERFACE_MEMBER => Error,
    EXPLICIT_INTERFACE_DECLARATION_IS_NOT_AN_INTERFACE => Error,
    EXPLICIT_INTERFACE_MEMBER_NOT_FOUND => Error,
    CONTAINING_TYPE_DOES_NOT_IMPLEMENT_INTERFACE => Error,
    ADDS_AN_ACCESSOR_NOT_FOUND_IN_INTERFACE_MEMBER => Error,
    VIRTUAL_OR_ABSTRACT_MEMBERS_CANNOT_BE_PRIVATE => Error,
    DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_STATIC => Error,
    DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_NOT_PUBLIC => Error,
    DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_WRONG_RETURN_TYPE => Error,
    FEATURE_NOT_AVAILABLE_IN_LANGUAGE_VERSION => Error,
    TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION => Error,
    TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION_FOR_MEMBER => Error,
    DECLARED_HERE => Message,
}
