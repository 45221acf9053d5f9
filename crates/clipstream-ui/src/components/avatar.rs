use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AvatarProps {
    pub nickname: AttrValue,
    #[prop_or_default]
    pub src: Option<AttrValue>,
}

#[function_component(Avatar)]
pub(crate) fn avatar(props: &AvatarProps) -> Html {
    props.src.as_ref().map_or_else(
        || {
            let initial = props
                .nickname
                .chars()
                .next()
                .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string());
            html! { <span class="avatar avatar-fallback" aria-hidden="true">{initial}</span> }
        },
        |src| {
            html! { <img class="avatar" src={src.clone()} alt={props.nickname.clone()} /> }
        },
    )
}
